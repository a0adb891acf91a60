use anchor_lang::prelude::*;

use crate::errors::DatePayError;

/// Insertion-ordered set of registered FIDs, kept in a single bounded account
/// so pages can be served without scanning individual player records.
#[account]
#[derive(InitSpace)]
pub struct PlayerDirectory {
    /// Registered FIDs in registration order.
    #[max_len(512)]
    pub fids: Vec<u64>,
    /// PDA bump seed.
    pub bump: u8,
}

impl PlayerDirectory {
    pub const SEED: &'static [u8] = b"directory";

    pub const MAX_PLAYERS: usize = 512;

    pub fn total_players(&self) -> u64 {
        self.fids.len() as u64
    }

    pub fn contains(&self, fid: u64) -> bool {
        self.fids.contains(&fid)
    }

    pub fn insert(&mut self, fid: u64) -> Result<()> {
        require!(!self.contains(fid), DatePayError::AlreadyRegistered);
        require!(
            self.fids.len() < Self::MAX_PLAYERS,
            DatePayError::DirectoryFull
        );
        self.fids.push(fid);
        Ok(())
    }

    /// Remove a FID, preserving registration order of the survivors.
    pub fn remove(&mut self, fid: u64) -> Result<()> {
        let index = self
            .fids
            .iter()
            .position(|&f| f == fid)
            .ok_or(DatePayError::PlayerNotRegistered)?;
        self.fids.remove(index);
        Ok(())
    }

    /// Slice `[offset, offset + limit)` of the FID list plus the total count.
    /// Out-of-range offsets and a zero limit yield an empty page, never an
    /// error; the limit is clamped to what remains.
    pub fn page(&self, offset: u64, limit: u64) -> (Vec<u64>, u64) {
        let total = self.total_players();
        if offset >= total || limit == 0 {
            return (Vec::new(), total);
        }
        let end = offset.saturating_add(limit).min(total);
        (self.fids[offset as usize..end as usize].to_vec(), total)
    }

    pub fn fid_at(&self, index: u64) -> Result<u64> {
        self.fids
            .get(index as usize)
            .copied()
            .ok_or_else(|| DatePayError::IndexOutOfRange.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory(fids: &[u64]) -> PlayerDirectory {
        PlayerDirectory {
            fids: fids.to_vec(),
            bump: 253,
        }
    }

    #[test]
    fn insert_tracks_order_and_count() {
        let mut d = directory(&[]);
        d.insert(1001).unwrap();
        d.insert(1002).unwrap();
        assert_eq!(d.total_players(), 2);
        assert!(d.contains(1001));
        assert!(d.contains(1002));
        assert!(!d.contains(9999));
        assert_eq!(d.fids, vec![1001, 1002]);
    }

    #[test]
    fn duplicate_insert_rejected() {
        let mut d = directory(&[1001]);
        assert_eq!(
            d.insert(1001).unwrap_err(),
            DatePayError::AlreadyRegistered.into()
        );
        assert_eq!(d.total_players(), 1);
    }

    #[test]
    fn capacity_is_enforced() {
        let mut d = directory(&(0..PlayerDirectory::MAX_PLAYERS as u64).collect::<Vec<_>>());
        assert_eq!(
            d.insert(u64::MAX).unwrap_err(),
            DatePayError::DirectoryFull.into()
        );
    }

    #[test]
    fn remove_keeps_survivor_order() {
        let mut d = directory(&[1001, 1002, 1003]);
        d.remove(1002).unwrap();
        assert_eq!(d.fids, vec![1001, 1003]);
        assert_eq!(
            d.remove(1002).unwrap_err(),
            DatePayError::PlayerNotRegistered.into()
        );
    }

    #[test]
    fn remove_then_insert_appends_at_the_end() {
        let mut d = directory(&[1001, 1002]);
        d.remove(1001).unwrap();
        d.insert(1001).unwrap();
        assert_eq!(d.fids, vec![1002, 1001]);
    }

    #[test]
    fn basic_pagination() {
        let d = directory(&[1001, 1002, 1003]);

        let (page1, total) = d.page(0, 2);
        assert_eq!(page1, vec![1001, 1002]);
        assert_eq!(total, 3);

        let (page2, total) = d.page(2, 2);
        assert_eq!(page2, vec![1003]);
        assert_eq!(total, 3);
    }

    #[test]
    fn page_concatenation_reproduces_the_set() {
        let fids: Vec<u64> = (1..=10).map(|i| 1000 + i).collect();
        let d = directory(&fids);

        for page_size in [1u64, 3, 4, 10, 100] {
            let mut seen = Vec::new();
            let mut offset = 0;
            loop {
                let (page, total) = d.page(offset, page_size);
                assert_eq!(total, 10);
                if page.is_empty() {
                    break;
                }
                offset += page.len() as u64;
                seen.extend(page);
            }
            assert_eq!(seen, fids);
        }
    }

    #[test]
    fn empty_pages_are_not_errors() {
        let d = directory(&[1001, 1002]);
        assert_eq!(d.page(100, 10), (Vec::new(), 2));
        assert_eq!(d.page(2, 10), (Vec::new(), 2));
        assert_eq!(d.page(0, 0), (Vec::new(), 2));
        assert_eq!(d.page(0, 100), (vec![1001, 1002], 2));
    }

    #[test]
    fn indexed_lookup() {
        let d = directory(&[1001, 1002]);
        assert_eq!(d.fid_at(0).unwrap(), 1001);
        assert_eq!(d.fid_at(1).unwrap(), 1002);
        assert_eq!(
            d.fid_at(2).unwrap_err(),
            DatePayError::IndexOutOfRange.into()
        );
    }
}

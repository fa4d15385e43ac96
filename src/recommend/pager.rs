/// Zero-based cursor over a finite ordered list, with clamped navigation.
///
/// Invariant: `0 <= index < len` whenever `len > 0`, and `index == 0` when
/// the list is empty. Stepping past either boundary is a no-op rather than
/// an error, so repeated presses at the edge are harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    index: usize,
    len: usize,
}

impl Pager {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advance one page, clamped at the last index.
    pub fn next(&mut self) {
        if self.index + 1 < self.len {
            self.index += 1;
        }
    }

    /// Step back one page, clamped at zero.
    pub fn prev(&mut self) {
        if self.index > 0 {
            self.index -= 1;
        }
    }

    /// The element under the cursor, or `None` for an empty list.
    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.index)
    }

    pub fn at_start(&self) -> bool {
        self.index == 0
    }

    pub fn at_end(&self) -> bool {
        self.len == 0 || self.index == self.len - 1
    }

    /// One-based position label as the screens render it, e.g. `2/4`.
    pub fn position_label(&self) -> String {
        format!("{}/{}", self.index + 1, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_clamps_at_last_index() {
        let mut pager = Pager::new(3);
        pager.next();
        pager.next();
        assert_eq!(pager.index(), 2);
        assert!(pager.at_end());
        // Repeated next at the boundary is a no-op
        pager.next();
        pager.next();
        assert_eq!(pager.index(), 2);
    }

    #[test]
    fn test_prev_clamps_at_zero() {
        let mut pager = Pager::new(3);
        pager.prev();
        assert_eq!(pager.index(), 0);
        pager.next();
        pager.prev();
        pager.prev();
        assert_eq!(pager.index(), 0);
    }

    #[test]
    fn test_next_l_times_reaches_last_and_stays() {
        let len = 5;
        let mut pager = Pager::new(len);
        for _ in 0..len {
            pager.next();
        }
        assert_eq!(pager.index(), len - 1);
        pager.next();
        assert_eq!(pager.index(), len - 1);
    }

    #[test]
    fn test_index_never_leaves_bounds() {
        let mut pager = Pager::new(4);
        for step in 0..20 {
            if step % 3 == 0 {
                pager.prev();
            } else {
                pager.next();
            }
            assert!(pager.index() < 4);
        }
    }

    #[test]
    fn test_empty_list() {
        let mut pager = Pager::new(0);
        assert!(pager.is_empty());
        assert_eq!(pager.current::<u8>(&[]), None);
        pager.next();
        pager.prev();
        assert_eq!(pager.index(), 0);
    }

    #[test]
    fn test_current_and_label() {
        let items = ["a", "b", "c"];
        let mut pager = Pager::new(items.len());
        assert_eq!(pager.current(&items), Some(&"a"));
        assert_eq!(pager.position_label(), "1/3");
        pager.next();
        assert_eq!(pager.current(&items), Some(&"b"));
        assert_eq!(pager.position_label(), "2/3");
    }
}

//! Internal macros shared by the list and cursor implementations.

/// Accessors for one end of the list: `$end`, `${end}_mut`, `cursor_$end` and
/// `cursor_${end}_mut`, all resolved through the position method `$locate`.
macro_rules! end_accessors {
    ($end:ident, $locate:ident, $what:literal) => {
        paste::paste! {
            #[doc = concat!("Returns a reference to the ", $what, " element, or `None` if the list is empty.")]
            pub fn $end(&self) -> Option<&T> {
                self.get(self.$locate())
            }

            #[doc = concat!("Returns a mutable reference to the ", $what, " element, or `None` if the list is empty.")]
            pub fn [<$end _mut>](&mut self) -> Option<&mut T> {
                let pos = self.$locate();
                self.get_mut(pos)
            }

            #[doc = concat!("A read-only cursor on the ", $what, " element (at the end position if empty).")]
            pub fn [<cursor_ $end>](&self) -> Cursor<'_, T, K, A> {
                Cursor::new(self, self.$locate())
            }

            #[doc = concat!("A mutable cursor on the ", $what, " element (at the end position if empty).")]
            pub fn [<cursor_ $end _mut>](&mut self) -> CursorMut<'_, T, K, A> {
                let pos = self.$locate();
                CursorMut::new(self, pos)
            }
        }
    };
}

/// Navigation shared by `Cursor` and `CursorMut`: both are a list reference
/// plus a position, and differ only in the kind of reference they hold.
macro_rules! cursor_navigation {
    ($cursor:ident) => {
        impl<'a, T, const K: usize, A: BucketAllocator<T, K>> $cursor<'a, T, K, A> {
            /// The position this cursor is on.
            pub fn position(&self) -> Position {
                self.pos
            }

            /// Returns true if the cursor is past the last element.
            pub fn is_end(&self) -> bool {
                self.pos.is_end()
            }

            /// Step to the next element, or to the end position after the last one.
            pub fn move_next(&mut self) {
                self.pos = self.list.next_position(self.pos);
            }

            /// Step to the previous element. From the end position this lands
            /// on the last element; from the first element it lands on the end.
            pub fn move_prev(&mut self) {
                self.pos = self.list.prev_position(self.pos);
            }

            /// The element after the current one, without moving.
            pub fn peek_next(&self) -> Option<&T> {
                self.list.get(self.list.next_position(self.pos))
            }

            /// The element before the current one, without moving.
            pub fn peek_prev(&self) -> Option<&T> {
                self.list.get(self.list.prev_position(self.pos))
            }
        }
    };
}

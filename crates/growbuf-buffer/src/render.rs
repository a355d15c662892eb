//! Human-readable listing of a buffer's state.

use std::fmt;

use growbuf_core::SlotAllocator;

use crate::buffer::GrowableIntBuffer;

/// `GrowableIntBuffer [size=3, cap=4]: [1, 2, 3]`
impl<A: SlotAllocator> fmt::Display for GrowableIntBuffer<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GrowableIntBuffer [size={}, cap={}]: [",
            self.size(),
            self.capacity()
        )?;
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("]")
    }
}

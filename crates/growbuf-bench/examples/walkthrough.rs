//! growbuf walkthrough: one buffer through its whole lifecycle.
//!
//! Demonstrates:
//!   1. Creating a buffer (size 0, capacity 4)
//!   2. Pushing ten values and watching capacity double 4 -> 8 -> 16
//!   3. Reading by index
//!   4. Popping three values (no shrink: 7 is not under 16 / 4)
//!   5. Overwriting an element and destroying the buffer
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example walkthrough

use growbuf_buffer::{BufferError, GrowableIntBuffer};

fn main() -> Result<(), BufferError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("growbuf walkthrough");
    println!("===================\n");

    // ─── Create ─────────────────────────────────────────────────

    let mut buf = GrowableIntBuffer::new()?;
    println!(
        "Created: size={}, capacity={}\n",
        buf.size(),
        buf.capacity()
    );

    // ─── Push ───────────────────────────────────────────────────

    println!("Pushing 10, 20, ..., 100");
    for i in 1..=10 {
        buf.push(i * 10)?;
    }
    println!("{buf}");

    // ─── Get ────────────────────────────────────────────────────

    println!("Element at index 5: {}\n", buf.get(5)?);

    // ─── Pop ────────────────────────────────────────────────────

    println!("Popping three values");
    for _ in 0..3 {
        println!("  popped {}", buf.pop()?);
    }
    println!("{buf}");

    // ─── Set ────────────────────────────────────────────────────

    println!("\nSetting index 2 to 999");
    buf.set(2, 999)?;
    println!("{buf}");

    let m = buf.metrics();
    println!(
        "\nReallocations: {} grow, {} shrink, {} elements copied",
        m.grow_events, m.shrink_events, m.elements_copied
    );

    buf.destroy();
    println!("\nDone.");
    Ok(())
}

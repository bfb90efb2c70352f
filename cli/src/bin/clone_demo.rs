//! clone-demo - a program whose two routines are deliberate clones.
//!
//! The two functions below have identical bodies on purpose: this file is the
//! smallest interesting input for the detector, and the same routine pair
//! appears in every language under `tests/fixtures/`. Running
//! `dupscan -s cli/src/bin/clone_demo.rs` reports them as one duplicate
//! group.
//!
//! The printed output is fixed: one greeting followed by five numbered lines,
//! each classified as even or odd, emitted twice (22 lines total).

use std::io::{self, Write};

fn greet_and_classify_one(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Hello, World!")?;
    for i in 0..5 {
        writeln!(out, "This is line {i}")?;
        if i % 2 == 0 {
            writeln!(out, "Even number")?;
        } else {
            writeln!(out, "Odd number")?;
        }
    }
    Ok(())
}

fn greet_and_classify_two(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Hello, World!")?;
    for i in 0..5 {
        writeln!(out, "This is line {i}")?;
        if i % 2 == 0 {
            writeln!(out, "Even number")?;
        } else {
            writeln!(out, "Odd number")?;
        }
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    greet_and_classify_one(&mut out)?;
    greet_and_classify_two(&mut out)?;
    Ok(())
}

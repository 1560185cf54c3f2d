//! Loading spinner frames, advanced by the event loop's tick timer.

/// Frame duration in milliseconds.
pub const FRAME_MS: u64 = 80;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// The frame for a given tick count.
pub fn frame(tick: u64) -> &'static str {
    FRAMES[(tick % FRAMES.len() as u64) as usize]
}

pub trait FramePacer {
    /// Blocks until the next frame is due.
    fn wait_for_next_frame(&mut self);
}

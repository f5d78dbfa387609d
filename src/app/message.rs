//! Application messages

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Animation ============
    /// Frame tick while any animation is running
    AnimationTick,

    // ============ Preview ============
    /// "Change" button pressed: retarget the ring to a random value
    ChangeValue,
    /// Pointer entered (true) or left (false) the "Change" button
    HoverChangeButton(bool),

    // ============ Window ============
    /// Main window opened
    WindowOpened(iced::window::Id),
    /// User asked to close the main window
    RequestClose,
}

/// Eingaben aus Host/UI ohne direkte Mutationslogik.
///
/// Positionen werden nicht mitgeliefert: der Controller liest sie beim
/// Verarbeiten vom `SnapCursor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchIntent {
    /// Cursor/Snap-Position hat sich geändert
    CursorMoved,
    /// LMB / Enter
    ConfirmRequested,
    /// ESC / RMB
    CancelRequested,
    /// Leertaste
    PauseToggled,
    /// Pfeil hoch / Mausrad hoch
    SegmentCountIncreaseRequested,
    /// Pfeil runter / Mausrad runter
    SegmentCountDecreaseRequested,
    /// R
    ResetPlacementRequested,
}

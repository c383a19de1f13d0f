/// Notification channels exposed to the rendering layer.
///
/// Events carry no payload; subscribers re-query current state through the
/// editor's read accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreEvent {
    /// Registry or selection content changed; targets need a redraw.
    TargetsChanged,
    /// Rectangle/lasso feedback changed; fires on every area-selection
    /// drag frame, so subscribers should treat it as high-frequency.
    OverlayChanged,
}

use filegate_models::Decision;

const MAX_TILT_DEGREES: f64 = 25.0;
const SETTLE_FACTOR: f64 = 0.5;

/// Horizontal drag as a fraction of the card width. Zero for a zero-width card.
#[must_use]
pub fn gesture_fraction(translation: f64, width: f64) -> f64 {
    if width > 0.0 { translation / width } else { 0.0 }
}

/// A drag commits only when it is strictly past the threshold; the sign picks
/// keep or discard.
#[must_use]
pub fn decision_for(fraction: f64, threshold: f64) -> Option<Decision> {
    (fraction.abs() > threshold).then(|| Decision::from_fraction(fraction))
}

/// Drag state of the top card.
///
/// While a drag is active the card follows the translation and its fraction
/// drives opacity, tilt and the verdict overlay. A release below the
/// threshold zeroes the fraction at once and lets the offset settle back over
/// a few ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeGesture {
    threshold: f64,
    translation: f64,
    width: f64,
    active: bool,
}

impl SwipeGesture {
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            translation: 0.0,
            width: 0.0,
            active: false,
        }
    }

    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Current horizontal offset of the card, in the same unit as the width.
    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.translation
    }

    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.active {
            gesture_fraction(self.translation, self.width)
        } else {
            0.0
        }
    }

    pub fn on_changed(&mut self, translation: f64, width: f64) {
        self.active = true;
        self.translation = translation;
        self.width = width;
    }

    /// Moves the card by `step` card widths, as an arrow key press does.
    pub fn nudge(&mut self, step: f64, width: f64) {
        let translation = if self.active { self.translation } else { 0.0 };
        self.on_changed(translation + step * width, width);
    }

    /// Ends the drag at `translation`. Returns the decision if the threshold was
    /// crossed; otherwise the card starts settling back.
    pub fn on_ended(&mut self, translation: f64, width: f64) -> Option<Decision> {
        self.translation = translation;
        self.width = width;
        let decision = decision_for(gesture_fraction(translation, width), self.threshold);

        self.active = false;
        if decision.is_some() {
            self.translation = 0.0;
        }
        decision
    }

    /// Ends the drag where it currently is.
    pub fn release(&mut self) -> Option<Decision> {
        if !self.active {
            return None;
        }
        self.on_ended(self.translation, self.width)
    }

    /// Ends the drag without deciding, whatever the distance.
    pub fn cancel(&mut self) {
        self.active = false;
    }

    /// Clears all drag state; used when the top card changes.
    pub fn reset(&mut self) {
        *self = Self::new(self.threshold);
    }

    /// One animation step of the snap back. Returns true while still moving.
    pub fn tick(&mut self) -> bool {
        if self.active || self.translation == 0.0 {
            return false;
        }

        self.translation *= SETTLE_FACTOR;
        if self.translation.abs() < 0.5 {
            self.translation = 0.0;
        }
        true
    }

    /// `1 - |fraction|`, clamped to `[0, 1]`.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        (1.0 - self.fraction().abs()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn rotation_degrees(&self) -> f64 {
        self.fraction() * MAX_TILT_DEGREES
    }

    /// The decision a release would commit right now, for the overlay.
    #[must_use]
    pub fn verdict(&self) -> Option<Decision> {
        decision_for(self.fraction(), self.threshold)
    }
}

impl Default for SwipeGesture {
    fn default() -> Self {
        Self::new(0.2)
    }
}

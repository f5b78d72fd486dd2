use crate::stroke::Stroke;

/// Every committed stroke, in z-order (later strokes paint on top).
///
/// This is what the surface is rebuilt from; the raster is never the source
/// of truth.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Drawing {
    strokes: Vec<Stroke>,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty strokes are not accepted.
    pub(crate) fn push(&mut self, stroke: Stroke) {
        debug_assert!(!stroke.is_empty());
        self.strokes.push(stroke);
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Removes whole strokes matching `remove`, returns how many went.
    pub(crate) fn remove_where(&mut self, mut remove: impl FnMut(&Stroke) -> bool) -> usize {
        let before = self.strokes.len();
        self.strokes.retain(|stroke| !remove(stroke));
        before - self.strokes.len()
    }
}

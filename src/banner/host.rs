// SPDX-License-Identifier: MPL-2.0
//! The container a banner presents itself into.
//!
//! A banner never reaches for a global window. Whoever presents it passes a
//! [`Host`], which owns the layer stack, knows the screen bounds and answers
//! accessibility queries.

use iced::Size;

/// Layers a banner adds to its host while presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Full-screen dimming overlay behind the banner.
    Overlay,
    /// The banner itself.
    Banner,
    /// Action buttons below the bottom edge.
    ActionStrip,
}

/// Capability interface of the hosting window.
pub trait Host {
    /// Screen bounds in the banner's coordinate space.
    fn bounds(&self) -> Size;

    /// Inserts a layer on top of the hierarchy.
    fn attach(&mut self, layer: Layer);

    /// Removes a previously attached layer.
    fn detach(&mut self, layer: Layer);

    /// Whether translucent surfaces should be drawn flat.
    fn reduce_transparency(&self) -> bool {
        false
    }

    /// Requests a heavy haptic impact. Hosts without haptics ignore it.
    fn haptic_impact(&mut self) {}
}

/// Plain in-memory host: a layer stack with fixed bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct HostWindow {
    bounds: Size,
    layers: Vec<Layer>,
    reduce_transparency: bool,
    haptic_impacts: usize,
}

impl HostWindow {
    #[must_use]
    pub fn new(bounds: Size) -> Self {
        Self {
            bounds,
            layers: Vec::new(),
            reduce_transparency: false,
            haptic_impacts: 0,
        }
    }

    #[must_use]
    pub fn with_reduce_transparency(mut self, reduce: bool) -> Self {
        self.reduce_transparency = reduce;
        self
    }

    pub fn set_bounds(&mut self, bounds: Size) {
        self.bounds = bounds;
    }

    /// Attached layers, bottom first.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    #[must_use]
    pub fn is_attached(&self, layer: Layer) -> bool {
        self.layers.contains(&layer)
    }

    #[must_use]
    pub fn haptic_impacts(&self) -> usize {
        self.haptic_impacts
    }
}

impl Host for HostWindow {
    fn bounds(&self) -> Size {
        self.bounds
    }

    fn attach(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    fn detach(&mut self, layer: Layer) {
        // Newest first, so concurrent banners unwind in stack order.
        if let Some(index) = self.layers.iter().rposition(|l| *l == layer) {
            self.layers.remove(index);
        }
    }

    fn reduce_transparency(&self) -> bool {
        self.reduce_transparency
    }

    fn haptic_impact(&mut self) {
        self.haptic_impacts += 1;
    }
}

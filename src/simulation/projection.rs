//! World-to-screen projections handed to the renderer
//!
//! Screen space has its origin at the top-left corner of a viewport with y
//! pointing down, matching the world's y axis. A projection scales meters to
//! pixels and centers the origin in its viewport.

use super::states::{NVec2, Rgb, System};

/// Bodies whose projected x is at or left of this are hinted as off-screen
pub const VISIBILITY_THRESHOLD: f64 = -20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub px_per_au: f64,
    pub viewport: [f64; 2],
}

impl Projection {
    /// Pixels per meter for a given AU length
    pub fn scale(&self, au: f64) -> f64 {
        self.px_per_au / au
    }

    pub fn center(&self) -> NVec2 {
        NVec2::new(self.viewport[0] / 2.0, self.viewport[1] / 2.0)
    }

    pub fn project(&self, x: &NVec2, au: f64) -> NVec2 {
        x * self.scale(au) + self.center()
    }

    /// Advisory only, it says nothing about the physics
    pub fn visible_hint(p: &NVec2) -> bool {
        p.x > VISIBILITY_THRESHOLD
    }

    pub fn contains(&self, p: &NVec2) -> bool {
        (0.0..=self.viewport[0]).contains(&p.x) && (0.0..=self.viewport[1]).contains(&p.y)
    }
}

/// Everything the renderer needs to draw one body
#[derive(Debug, Clone, PartialEq)]
pub struct BodyView<'a> {
    pub index: usize,
    pub name: &'a str,
    pub full: NVec2, // full-scale screen position
    pub overview: NVec2, // overview screen position
    pub radius: f64,
    pub color: Rgb,
    pub ring: bool,
    pub anchor: bool,
    pub label: Option<String>, // None for the anchor
}

impl BodyView<'_> {
    /// Whether the overview should draw this body at all
    pub fn on_overview(&self, overview: &Projection) -> bool {
        Projection::visible_hint(&self.overview) && overview.contains(&self.overview)
    }
}

impl System {
    pub fn full_projection(&self) -> Projection {
        Projection {
            px_per_au: self.params.scale,
            viewport: self.params.view_size,
        }
    }

    pub fn overview_projection(&self) -> Projection {
        Projection {
            px_per_au: self.params.mini_scale,
            viewport: self.params.mini_view_size,
        }
    }

    /// `"{name} - {distance}AU"` for non-anchor bodies
    pub fn label(&self, i: usize) -> Option<String> {
        let body = self.bodies.get(i)?;
        if body.anchor {
            return None;
        }
        let au = body.dist_to_anchor / self.params.au;
        Some(format!("{} - {:.3}AU", body.name, au))
    }

    /// Label rows for every non-anchor body, in collection order
    pub fn labels(&self) -> Vec<String> {
        (0..self.bodies.len()).filter_map(|i| self.label(i)).collect()
    }

    pub fn body_view(&self, i: usize) -> Option<BodyView<'_>> {
        let body = self.bodies.get(i)?;
        let au = self.params.au;
        let (full, overview) = (self.full_projection(), self.overview_projection());
        Some(BodyView {
            index: i,
            name: &body.name,
            full: body.screen_position(full.scale(au), full.center()),
            overview: body.screen_position(overview.scale(au), overview.center()),
            radius: body.radius,
            color: body.color,
            ring: body.ring,
            anchor: body.anchor,
            label: self.label(i),
        })
    }

    pub fn body_views(&self) -> impl Iterator<Item = BodyView<'_>> + '_ {
        (0..self.bodies.len()).filter_map(move |i| self.body_view(i))
    }
}

// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/surface.rs
//
// Rendering surface notified by the crop controller, plus a retained layer
// the view draws from.

use super::geometry::{Point, Square};
use super::handle::Handle;

/// A drawable element of the crop square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Outline,
    Handle(Handle),
}

impl Part {
    /// All parts in their initial back-to-front order.
    pub const ALL: [Part; 4] = [
        Part::Outline,
        Part::Handle(Handle::NorthWest),
        Part::Handle(Handle::SouthEast),
        Part::Handle(Handle::Move),
    ];
}

/// Identifier of the host container the parts are drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerId(pub u32);

/// Receiver of geometry and presentation updates.
pub trait Surface {
    /// Outline bounds changed.
    fn place_outline(&mut self, square: Square);

    /// A handle center changed.
    fn place_handle(&mut self, handle: Handle, center: Point);

    fn set_visible(&mut self, part: Part, visible: bool);

    /// Move `part` above every other part.
    fn raise(&mut self, part: Part);

    /// Move `part` into `container`, removing it from its previous one.
    fn reparent(&mut self, part: Part, container: ContainerId);
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Node {
    part: Part,
    visible: bool,
    container: Option<ContainerId>,
}

/// Retained state of the crop square as last pushed by the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    outline: Option<Square>,
    centers: [Option<Point>; 3],
    // Back-to-front.
    nodes: Vec<Node>,
}

impl Default for Layer {
    fn default() -> Self {
        Self::new()
    }
}

impl Layer {
    pub fn new() -> Self {
        Self {
            outline: None,
            centers: [None; 3],
            nodes: Part::ALL
                .iter()
                .map(|&part| Node {
                    part,
                    visible: true,
                    container: None,
                })
                .collect(),
        }
    }

    pub fn outline(&self) -> Option<Square> {
        self.outline
    }

    pub fn handle_center(&self, handle: Handle) -> Option<Point> {
        self.centers[slot(handle)]
    }

    pub fn is_visible(&self, part: Part) -> bool {
        self.node(part).is_some_and(|node| node.visible)
    }

    pub fn container_of(&self, part: Part) -> Option<ContainerId> {
        self.node(part).and_then(|node| node.container)
    }

    /// Parts from bottom to top.
    pub fn z_order(&self) -> impl Iterator<Item = Part> + '_ {
        self.nodes.iter().map(|node| node.part)
    }

    pub fn z_index(&self, part: Part) -> Option<usize> {
        self.nodes.iter().position(|node| node.part == part)
    }

    /// Topmost visible handle whose circle of `radius` contains `point`.
    pub fn handle_at(&self, point: Point, radius: f32) -> Option<Handle> {
        self.nodes
            .iter()
            .rev()
            .filter(|node| node.visible)
            .find_map(|node| match node.part {
                Part::Handle(handle) => self
                    .handle_center(handle)
                    .filter(|&center| Handle::hit(center, radius, point))
                    .map(|_| handle),
                Part::Outline => None,
            })
    }

    fn node(&self, part: Part) -> Option<&Node> {
        self.nodes.iter().find(|node| node.part == part)
    }

    fn node_mut(&mut self, part: Part) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|node| node.part == part)
    }
}

impl Surface for Layer {
    fn place_outline(&mut self, square: Square) {
        self.outline = Some(square);
    }

    fn place_handle(&mut self, handle: Handle, center: Point) {
        self.centers[slot(handle)] = Some(center);
    }

    fn set_visible(&mut self, part: Part, visible: bool) {
        if let Some(node) = self.node_mut(part) {
            node.visible = visible;
        }
    }

    fn raise(&mut self, part: Part) {
        if let Some(index) = self.z_index(part) {
            let node = self.nodes.remove(index);
            self.nodes.push(node);
        }
    }

    fn reparent(&mut self, part: Part, container: ContainerId) {
        if let Some(node) = self.node_mut(part) {
            node.container = Some(container);
        }
    }
}

fn slot(handle: Handle) -> usize {
    match handle {
        Handle::NorthWest => 0,
        Handle::SouthEast => 1,
        Handle::Move => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed_layer() -> Layer {
        let square = Square::new(50.0, 50.0, 100.0);
        let mut layer = Layer::new();
        layer.place_outline(square);
        for handle in Handle::ALL {
            layer.place_handle(handle, handle.center(&square));
        }
        layer
    }

    #[test]
    fn test_initial_order_keeps_handles_above_outline() {
        let layer = Layer::new();
        let order: Vec<Part> = layer.z_order().collect();
        assert_eq!(order, Part::ALL.to_vec());
        assert!(Part::ALL.iter().all(|&part| layer.is_visible(part)));
        assert_eq!(layer.outline(), None);
    }

    #[test]
    fn test_raise_moves_part_to_top() {
        let mut layer = Layer::new();
        layer.raise(Part::Outline);
        assert_eq!(layer.z_index(Part::Outline), Some(3));
        assert_eq!(layer.z_index(Part::Handle(Handle::NorthWest)), Some(0));
    }

    #[test]
    fn test_handle_at_prefers_topmost() {
        let mut layer = Layer::new();
        // Stack NW and Move on the same spot.
        layer.place_handle(Handle::NorthWest, Point::new(20.0, 20.0));
        layer.place_handle(Handle::Move, Point::new(20.0, 20.0));
        assert_eq!(layer.handle_at(Point::new(21.0, 21.0), 10.0), Some(Handle::Move));

        layer.raise(Part::Handle(Handle::NorthWest));
        assert_eq!(
            layer.handle_at(Point::new(21.0, 21.0), 10.0),
            Some(Handle::NorthWest)
        );
    }

    #[test]
    fn test_handle_at_skips_hidden_handles() {
        let mut layer = placed_layer();
        assert_eq!(
            layer.handle_at(Point::new(152.0, 149.0), 10.0),
            Some(Handle::SouthEast)
        );

        layer.set_visible(Part::Handle(Handle::SouthEast), false);
        assert_eq!(layer.handle_at(Point::new(152.0, 149.0), 10.0), None);
    }

    #[test]
    fn test_handle_at_misses_outline_interior() {
        let layer = placed_layer();
        assert_eq!(layer.handle_at(Point::new(100.0, 100.0), 10.0), None);
    }

    #[test]
    fn test_reparent_records_container() {
        let mut layer = Layer::new();
        assert_eq!(layer.container_of(Part::Outline), None);
        layer.reparent(Part::Outline, ContainerId(7));
        assert_eq!(layer.container_of(Part::Outline), Some(ContainerId(7)));
    }
}

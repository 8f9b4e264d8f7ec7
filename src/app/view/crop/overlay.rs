// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/overlay.rs
//
// Crop square overlay widget: outline, circular handles and the pointer
// source that turns cursor motion into per-handle drag messages.

use crate::app::AppMessage;
use crate::app::model::CropSquare;
use crate::domain::crop::{self, ContainerId, Handle, Layer, Part};
use cosmic::{
    Element, Renderer,
    iced::{
        Border, Color, Length, Point, Rectangle, Size,
        advanced::{
            Clipboard, Layout, Shell, Widget,
            layout::{Limits, Node},
            renderer::{Quad, Renderer as QuadRenderer},
            widget::{Tree, tree},
        },
        event::{Event, Status},
        mouse::{self, Button, Cursor},
    },
};

/// Smallest on-screen hit radius, so handles stay grabbable on zoomed-out images.
const MIN_HIT_RADIUS: f32 = 8.0;
const HANDLE_COLOR: Color = Color::from_rgb(1.0, 0.843, 0.0);
const BORDER_COLOR: Color = Color::WHITE;
const BORDER_WIDTH: f32 = 2.0;

/// Handle currently held by the pointer.
#[derive(Debug, Clone, Copy, Default)]
struct State {
    grabbed: Option<Handle>,
}

/// Draws a crop square's layer and publishes drags on it. Borrows the
/// layer from the model for the lifetime of the view.
pub struct CropSquareOverlay<'a> {
    img_width: u32,
    img_height: u32,
    layer: &'a Layer,
    handle_radius: f32,
    container: ContainerId,
}

impl<'a> CropSquareOverlay<'a> {
    pub fn new(
        img_width: u32,
        img_height: u32,
        crop: &'a CropSquare,
        container: ContainerId,
    ) -> Self {
        Self {
            img_width,
            img_height,
            layer: crop.surface(),
            handle_radius: crop.handle_radius(),
            container,
        }
    }

    /// Scale and offset (relative to the widget origin) of the image when it
    /// is fitted into `bounds`, centered and aspect-preserving.
    #[allow(clippy::cast_precision_loss)]
    fn fit(&self, bounds: &Rectangle) -> (f32, Point) {
        let img_w = self.img_width.max(1) as f32;
        let img_h = self.img_height.max(1) as f32;
        let scale = (bounds.width / img_w).min(bounds.height / img_h);

        let offset = Point::new(
            (bounds.width - img_w * scale) / 2.0,
            (bounds.height - img_h * scale) / 2.0,
        );
        (scale, offset)
    }

    /// Map a cursor position relative to the widget into image space.
    #[allow(clippy::cast_precision_loss)]
    fn screen_to_image(&self, bounds: &Rectangle, point: Point) -> crop::Point {
        let (scale, offset) = self.fit(bounds);
        if scale <= 0.0 {
            return crop::Point::default();
        }

        let x = ((point.x - offset.x) / scale).clamp(0.0, self.img_width as f32);
        let y = ((point.y - offset.y) / scale).clamp(0.0, self.img_height as f32);
        crop::Point::new(x, y)
    }

    /// Map an image-space position to absolute screen coordinates.
    fn image_to_screen(&self, bounds: &Rectangle, point: crop::Point) -> Point {
        let (scale, offset) = self.fit(bounds);
        Point::new(
            bounds.x + offset.x + point.x * scale,
            bounds.y + offset.y + point.y * scale,
        )
    }

    fn hosts(&self, part: Part) -> bool {
        self.layer.is_visible(part) && self.layer.container_of(part) == Some(self.container)
    }

    fn hit_test_handle(&self, bounds: &Rectangle, point: Point) -> Option<Handle> {
        let (scale, _) = self.fit(bounds);
        let radius = if scale > 0.0 {
            self.handle_radius.max(MIN_HIT_RADIUS / scale)
        } else {
            self.handle_radius
        };

        self.layer
            .handle_at(self.screen_to_image(bounds, point), radius)
            .filter(|&handle| self.hosts(Part::Handle(handle)))
    }

    fn cursor_for_handle(handle: Handle, grabbed: bool) -> mouse::Interaction {
        match handle {
            Handle::NorthWest | Handle::SouthEast => mouse::Interaction::ResizingDiagonallyDown,
            Handle::Move if grabbed => mouse::Interaction::Grabbing,
            Handle::Move => mouse::Interaction::Grab,
        }
    }

    fn draw_outline(&self, renderer: &mut Renderer, bounds: &Rectangle) {
        let Some(square) = self.layer.outline() else {
            return;
        };

        let top_left = self.image_to_screen(bounds, square.top_left());
        let bottom_right = self.image_to_screen(bounds, square.bottom_right());
        let w = bottom_right.x - top_left.x;
        let h = bottom_right.y - top_left.y;

        // Top
        draw_quad(
            renderer,
            Rectangle::new(top_left, Size::new(w, BORDER_WIDTH)),
            BORDER_COLOR,
            0.0,
        );
        // Bottom
        draw_quad(
            renderer,
            Rectangle::new(
                Point::new(top_left.x, bottom_right.y - BORDER_WIDTH),
                Size::new(w, BORDER_WIDTH),
            ),
            BORDER_COLOR,
            0.0,
        );
        // Left
        draw_quad(
            renderer,
            Rectangle::new(top_left, Size::new(BORDER_WIDTH, h)),
            BORDER_COLOR,
            0.0,
        );
        // Right
        draw_quad(
            renderer,
            Rectangle::new(
                Point::new(bottom_right.x - BORDER_WIDTH, top_left.y),
                Size::new(BORDER_WIDTH, h),
            ),
            BORDER_COLOR,
            0.0,
        );
    }

    fn draw_handle(&self, renderer: &mut Renderer, bounds: &Rectangle, handle: Handle) {
        let Some(center) = self.layer.handle_center(handle) else {
            return;
        };

        let (scale, _) = self.fit(bounds);
        let radius = self.handle_radius * scale;
        let center = self.image_to_screen(bounds, center);

        draw_quad(
            renderer,
            Rectangle::new(
                Point::new(center.x - radius, center.y - radius),
                Size::new(radius * 2.0, radius * 2.0),
            ),
            HANDLE_COLOR,
            radius,
        );
    }
}

impl Widget<AppMessage, cosmic::Theme, Renderer> for CropSquareOverlay<'_> {
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(&self, _tree: &mut Tree, _renderer: &Renderer, limits: &Limits) -> Node {
        Node::new(limits.max())
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut Renderer,
        _theme: &cosmic::Theme,
        _style: &cosmic::iced::advanced::renderer::Style,
        layout: Layout<'_>,
        _cursor: Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();

        for part in self.layer.z_order() {
            if !self.hosts(part) {
                continue;
            }
            match part {
                Part::Outline => self.draw_outline(renderer, &bounds),
                Part::Handle(handle) => self.draw_handle(renderer, &bounds, handle),
            }
        }
    }

    fn on_event(
        &mut self,
        tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, AppMessage>,
        _viewport: &Rectangle,
    ) -> Status {
        let bounds = layout.bounds();
        let state = tree.state.downcast_mut::<State>();

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(Button::Left)) => {
                if let Some(pos) = cursor.position_in(bounds) {
                    if let Some(handle) = self.hit_test_handle(&bounds, pos) {
                        state.grabbed = Some(handle);
                        return Status::Captured;
                    }
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if let Some(handle) = state.grabbed {
                    if let Some(pos) = cursor.position_in(bounds) {
                        let pointer = self.screen_to_image(&bounds, pos);
                        shell.publish(AppMessage::CropHandleDragged {
                            handle,
                            x: pointer.x,
                            y: pointer.y,
                        });
                        return Status::Captured;
                    }
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(Button::Left)) => {
                if state.grabbed.take().is_some() {
                    return Status::Captured;
                }
            }
            _ => {}
        }

        Status::Ignored
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let bounds = layout.bounds();
        let state = tree.state.downcast_ref::<State>();

        if let Some(handle) = state.grabbed {
            return Self::cursor_for_handle(handle, true);
        }

        cursor
            .position_in(bounds)
            .and_then(|pos| self.hit_test_handle(&bounds, pos))
            .map_or(mouse::Interaction::default(), |handle| {
                Self::cursor_for_handle(handle, false)
            })
    }
}

impl<'a> From<CropSquareOverlay<'a>> for Element<'a, AppMessage> {
    fn from(widget: CropSquareOverlay<'a>) -> Self {
        Element::new(widget)
    }
}

fn draw_quad(renderer: &mut Renderer, bounds: Rectangle, color: Color, radius: f32) {
    renderer.fill_quad(
        Quad {
            bounds,
            border: Border {
                radius: radius.into(),
                ..Border::default()
            },
            ..Quad::default()
        },
        color,
    );
}

pub fn crop_square_overlay(
    img_width: u32,
    img_height: u32,
    crop: &CropSquare,
    container: ContainerId,
) -> CropSquareOverlay<'_> {
    CropSquareOverlay::new(img_width, img_height, crop, container)
}

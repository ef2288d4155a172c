//! GPUI host for a [`Figure`].
//!
//! Left-drag selects a region to zoom into, right-click restores auto-scaling.

use crate::figure::{ChangeKind, Figure, FigureChange};
use crate::gpui_backend::paint_draw_list;
use crate::surface::{DrawList, Surface};
use crate::view_controller::{RegionDrag, ViewController};
use gpui::prelude::*;
use gpui::*;
use std::cell::RefCell;
use std::rc::Rc;

pub struct FigureView {
    figure: Rc<RefCell<Figure>>,
    drag: RegionDrag,
    pending: Rc<RefCell<Vec<FigureChange>>>,
}

impl FigureView {
    pub fn new(figure: Figure, cx: &mut Context<Self>) -> Self {
        Self::for_figure(Rc::new(RefCell::new(figure)), cx)
    }

    /// Hosts a shared figure. Replaces the figure's change callback.
    ///
    /// Changes are queued and applied, followed by a repaint, on the next turn of
    /// the foreground executor.
    pub fn for_figure(figure: Rc<RefCell<Figure>>, cx: &mut Context<Self>) -> Self {
        let pending = Rc::new(RefCell::new(Vec::new()));
        let queue = pending.clone();
        let view = cx.weak_entity();
        let executor = cx.foreground_executor().clone();
        let async_cx = cx.to_async();
        figure.borrow_mut().set_change_callback(move |change| {
            let mut queue = queue.borrow_mut();
            queue.push(*change);
            // A flush is already scheduled for the earlier entries.
            if queue.len() > 1 {
                return;
            }
            let view = view.clone();
            let mut cx = async_cx.clone();
            executor
                .spawn(async move {
                    let _ = view.update(&mut cx, |view, cx| {
                        view.apply_changes();
                        cx.notify();
                    });
                })
                .detach();
        });
        Self {
            figure,
            drag: RegionDrag::default(),
            pending,
        }
    }

    pub fn figure(&self) -> Rc<RefCell<Figure>> {
        self.figure.clone()
    }

    pub fn selection(&self) -> Option<Bounds<Pixels>> {
        self.drag.selection()
    }

    pub fn begin_region(&mut self, position: Point<Pixels>, cx: &mut Context<Self>) {
        self.drag.press(position);
        cx.notify();
    }

    pub fn drag_region(&mut self, position: Point<Pixels>, cx: &mut Context<Self>) {
        if self.drag.drag(position) {
            cx.notify();
        }
    }

    /// Finishes a drag; returns whether the figure zoomed.
    pub fn end_region(&mut self, position: Point<Pixels>, cx: &mut Context<Self>) -> bool {
        let was_active = self.drag.is_active();
        let tracked = match self.drag.release(position) {
            Some((start, end)) => ViewController::track(&mut self.figure.borrow_mut(), start, end),
            None => false,
        };
        self.apply_changes();
        if was_active {
            cx.notify();
        }
        tracked
    }

    pub fn reset_zoom(&mut self, cx: &mut Context<Self>) {
        self.drag.cancel();
        self.figure.borrow_mut().update();
        cx.notify();
    }

    /// Applies queued change notifications: data changes re-scale the owning metrics.
    fn apply_changes(&mut self) {
        let changes: Vec<FigureChange> = self.pending.borrow_mut().drain(..).collect();
        if changes.is_empty() {
            return;
        }
        let mut figure = self.figure.borrow_mut();
        for change in changes {
            if let (ChangeKind::Data, Some(item)) = (change.kind, change.item) {
                figure.update_item_owner(item);
            }
        }
    }

    fn handle_left_down(&mut self, event: &MouseDownEvent, _win: &mut Window, cx: &mut Context<Self>) {
        self.begin_region(event.position, cx);
    }

    fn handle_right_down(&mut self, _: &MouseDownEvent, _win: &mut Window, cx: &mut Context<Self>) {
        self.reset_zoom(cx);
    }

    fn handle_mouse_move(&mut self, event: &MouseMoveEvent, _win: &mut Window, cx: &mut Context<Self>) {
        self.drag_region(event.position, cx);
    }

    fn handle_mouse_up(&mut self, event: &MouseUpEvent, _win: &mut Window, cx: &mut Context<Self>) {
        self.end_region(event.position, cx);
    }
}

impl Render for FigureView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.apply_changes();

        let figure = self.figure.clone();
        let selection = self.drag.selection();
        let selection_color = figure.borrow().theme.selection;

        div()
            .size_full()
            .on_mouse_down(MouseButton::Left, cx.listener(Self::handle_left_down))
            .on_mouse_down(MouseButton::Right, cx.listener(Self::handle_right_down))
            .on_mouse_move(cx.listener(Self::handle_mouse_move))
            .on_mouse_up(MouseButton::Left, cx.listener(Self::handle_mouse_up))
            .child(
                canvas(|_, _, _| {}, move |bounds, (), window, cx| {
                    let mut list = DrawList::new();
                    figure.borrow_mut().draw(&mut list, bounds);
                    if let Some(rect) = selection {
                        list.set_color(selection_color);
                        list.set_line_width(1.0);
                        list.stroke_rect(rect);
                    }
                    paint_draw_list(&list, window, cx);
                })
                .size_full(),
            )
    }
}

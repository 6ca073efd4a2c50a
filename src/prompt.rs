// Confirmation session state machine: Closed -> Open -> Closed.
// Exactly one of the two callbacks fires per session.

use crate::anchor::MeasureAnchor;
use crate::messages::{select_message, MessageKey};
use crate::model::prompt::{AnchorRect, Direction, EntityType, PopupPosition, Side};
use crate::placement::{self, ArrowEdge};

/// Decision callback. Receives the session that just closed.
pub type Callback<'a, T> = Box<dyn FnMut(PromptSession<T>) + 'a>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptState {
    Closed,
    Open,
}

/// One open-to-closed lifecycle. `payload` identifies what is being deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSession<T> {
    pub entity_type: EntityType,
    pub anchor: Option<AnchorRect>,
    pub side: Side,
    pub direction: Direction,
    pub position: Option<PopupPosition>,
    pub message: MessageKey,
    pub payload: T,
}

impl<T> PromptSession<T> {
    pub fn view(&self) -> PromptView {
        PromptView {
            entity_type: self.entity_type,
            position: self.position,
            message: self.message,
            direction: self.direction,
            arrow: placement::arrow_edge(self.direction),
        }
    }
}

/// Everything the view collaborator needs to draw the popup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PromptView {
    pub entity_type: EntityType,
    /// `None` means default (centred) placement.
    pub position: Option<PopupPosition>,
    pub message: MessageKey,
    pub direction: Direction,
    pub arrow: ArrowEdge,
}

pub struct PromptController<'a, T> {
    session: Option<PromptSession<T>>,
    on_confirm: Callback<'a, T>,
    on_cancel: Callback<'a, T>,
}

impl<'a, T> PromptController<'a, T> {
    pub fn new(
        on_confirm: impl FnMut(PromptSession<T>) + 'a,
        on_cancel: impl FnMut(PromptSession<T>) + 'a,
    ) -> Self {
        Self {
            session: None,
            on_confirm: Box::new(on_confirm),
            on_cancel: Box::new(on_cancel),
        }
    }

    pub fn state(&self) -> PromptState {
        if self.session.is_some() { PromptState::Open } else { PromptState::Closed }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&PromptSession<T>> {
        self.session.as_ref()
    }

    pub fn view(&self) -> Option<PromptView> {
        self.session.as_ref().map(PromptSession::view)
    }

    /// Start a session anchored to `anchor`.
    ///
    /// An anchor that cannot be measured is not fatal: the prompt opens with
    /// default placement. Opening over an open session replaces it without
    /// firing either callback; callers should not rely on that.
    pub fn open<A>(
        &mut self,
        entity_type: EntityType,
        anchor: &A,
        side: Side,
        direction: Direction,
        payload: T,
    ) -> PromptView
    where
        A: MeasureAnchor + ?Sized,
    {
        if self.session.is_some() {
            log::warn!("prompt opened while a session was still open; discarding it");
        }

        let anchor = match anchor.measure() {
            Ok(rect) => Some(rect),
            Err(e) => {
                log::debug!("prompt anchor unavailable ({}), using default placement", e);
                None
            }
        };
        let position = placement::resolve(anchor.as_ref(), side, direction);
        let message = select_message(entity_type);

        log::debug!(
            "prompt open: {} side={:?} dir={} position={:?}",
            entity_type, side, direction, position
        );

        let session = PromptSession {
            entity_type,
            anchor,
            side,
            direction,
            position,
            message,
            payload,
        };
        let view = session.view();
        self.session = Some(session);
        view
    }

    /// Fire the confirm callback and close. No-op unless open.
    pub fn confirm(&mut self) -> bool {
        let Some(session) = self.session.take() else { return false };
        log::debug!("prompt confirmed: {}", session.entity_type);
        (self.on_confirm)(session);
        true
    }

    /// Fire the cancel callback and close. No-op unless open.
    pub fn cancel(&mut self) -> bool {
        let Some(session) = self.session.take() else { return false };
        log::debug!("prompt cancelled: {}", session.entity_type);
        (self.on_cancel)(session);
        true
    }

    /// The user closed the overlay without picking a button. Same as cancel.
    pub fn dismiss(&mut self) -> bool {
        self.cancel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, PartialEq)]
    enum Fired {
        Confirm(&'static str),
        Cancel(&'static str),
    }

    fn anchor() -> AnchorRect {
        AnchorRect::new(100.0, 50.0, 150.0, 20.0)
    }

    fn controller(log: &RefCell<Vec<Fired>>) -> PromptController<'_, &'static str> {
        PromptController::new(
            move |s: PromptSession<&'static str>| log.borrow_mut().push(Fired::Confirm(s.payload)),
            move |s: PromptSession<&'static str>| log.borrow_mut().push(Fired::Cancel(s.payload)),
        )
    }

    #[test]
    fn costume_to_the_right_in_ltr() {
        let log = RefCell::new(vec![]);
        let mut c = controller(&log);
        let view = c.open(EntityType::Costume, &anchor(), Side::Right, Direction::Ltr, "hat");

        assert_eq!(c.state(), PromptState::Open);
        assert_eq!(view.message, MessageKey::AskDeleteCostume);
        assert_eq!(view.position, Some(PopupPosition { top: 80.0, left: 175.0 }));
        assert_eq!(view.arrow, ArrowEdge::Right);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn rtl_overrides_left_side() {
        let log = RefCell::new(vec![]);
        let mut c = controller(&log);
        let view = c.open(EntityType::Costume, &anchor(), Side::Left, Direction::Rtl, "hat");

        assert_eq!(view.position, Some(PopupPosition { top: 80.0, left: 175.0 }));
        assert_eq!(view.arrow, ArrowEdge::Left);
        assert_eq!(c.session().map(|s| s.side), Some(Side::Left));
    }

    #[test]
    fn missing_anchor_opens_with_default_placement() {
        let log = RefCell::new(vec![]);
        let mut c = controller(&log);
        let missing: Option<AnchorRect> = None;
        let view = c.open(EntityType::Sound, &missing, Side::Right, Direction::Ltr, "meow");

        assert!(c.is_open());
        assert_eq!(view.position, None);
        assert_eq!(view.message, MessageKey::AskDeleteSound);
        assert_eq!(c.session().and_then(|s| s.anchor), None);
    }

    #[test]
    fn confirm_fires_once() {
        let log = RefCell::new(vec![]);
        let mut c = controller(&log);
        c.open(EntityType::Sprite, &anchor(), Side::Right, Direction::Ltr, "cat");

        assert!(c.confirm());
        assert!(!c.confirm());
        assert!(!c.cancel());
        assert!(!c.dismiss());
        assert_eq!(c.state(), PromptState::Closed);
        assert!(c.view().is_none());
        drop(c);
        assert_eq!(log.into_inner(), vec![Fired::Confirm("cat")]);
    }

    #[test]
    fn cancel_fires_once() {
        let log = RefCell::new(vec![]);
        let mut c = controller(&log);
        c.open(EntityType::Sprite, &anchor(), Side::Left, Direction::Ltr, "cat");

        assert!(c.cancel());
        assert!(!c.confirm());
        assert!(!c.cancel());
        drop(c);
        assert_eq!(log.into_inner(), vec![Fired::Cancel("cat")]);
    }

    #[test]
    fn dismiss_is_cancel() {
        let log = RefCell::new(vec![]);
        let mut c = controller(&log);
        c.open(EntityType::Sound, &anchor(), Side::Right, Direction::Ltr, "pop");

        assert!(c.dismiss());
        assert!(!c.dismiss());
        drop(c);
        assert_eq!(log.into_inner(), vec![Fired::Cancel("pop")]);
    }

    #[test]
    fn closed_controller_ignores_decisions() {
        let log = RefCell::new(vec![]);
        let mut c = controller(&log);
        assert!(!c.confirm());
        assert!(!c.cancel());
        drop(c);
        assert!(log.into_inner().is_empty());
    }

    #[test]
    fn sessions_restart_the_cycle() {
        let log = RefCell::new(vec![]);
        let mut c = controller(&log);
        c.open(EntityType::Sprite, &anchor(), Side::Right, Direction::Ltr, "a");
        c.confirm();
        c.open(EntityType::Sound, &anchor(), Side::Right, Direction::Ltr, "b");
        c.cancel();
        drop(c);
        assert_eq!(log.into_inner(), vec![Fired::Confirm("a"), Fired::Cancel("b")]);
    }

    #[test]
    fn reopening_discards_without_callbacks() {
        let log = RefCell::new(vec![]);
        let mut c = controller(&log);
        c.open(EntityType::Sprite, &anchor(), Side::Right, Direction::Ltr, "first");
        c.open(EntityType::Costume, &anchor(), Side::Right, Direction::Ltr, "second");
        assert!(log.borrow().is_empty());
        c.confirm();
        drop(c);
        assert_eq!(log.into_inner(), vec![Fired::Confirm("second")]);
    }
}

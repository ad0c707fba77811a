//! Cart view controller.
//!
//! Holds the shopper's cart as last read from the backend. Every mutation is one request to
//! change state followed by one request to re-read it; the local snapshot is never patched
//! in place. Failures are logged and otherwise leave the snapshot as it was.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use rusty_money::{Money, iso::Currency};
use techmart::{CartLineId, CartSnapshot, Quantity, pricing::PriceError};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

use crate::{
    backend::CartBackend,
    cart::events::{CartEvent, MAX_QUANTITY_MESSAGE, Notice},
    config::PaymentsConfig,
    payments::{CheckoutRedirect, Redirector, StripeCheckout},
};

/// What a controller operation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartOutcome {
    /// The backend accepted the change (or the read) and the snapshot was replaced.
    Applied,

    /// The line was deleted and the snapshot was replaced.
    Removed,

    /// The backend accepted the change but re-reading the cart failed; the snapshot predates
    /// the change.
    Stale,

    /// The line is already at the maximum quantity; nothing was sent.
    LimitReached,

    /// The backend call failed or was refused; the snapshot is unchanged.
    Skipped,

    /// The shopper was sent to the hosted checkout page.
    Redirected(CheckoutRedirect),
}

/// Owns the cart snapshot and keeps it in step with the backend.
pub struct CartController {
    backend: Arc<dyn CartBackend>,
    payments: PaymentsConfig,
    redirector: Arc<dyn Redirector>,
    events: UnboundedSender<CartEvent>,
    lines: CartSnapshot,
    loading: bool,
}

impl CartController {
    /// Create a controller with an empty snapshot.
    pub fn new(
        backend: Arc<dyn CartBackend>,
        payments: PaymentsConfig,
        redirector: Arc<dyn Redirector>,
        events: UnboundedSender<CartEvent>,
    ) -> Self {
        Self {
            backend,
            payments,
            redirector,
            events,
            lines: CartSnapshot::new(),
            loading: false,
        }
    }

    /// The current snapshot.
    pub fn lines(&self) -> &CartSnapshot {
        &self.lines
    }

    /// Whether the initial load is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Sum of line quantities in the current snapshot.
    pub fn total_quantity(&self) -> u32 {
        self.lines.total_quantity()
    }

    /// Sum of line totals in the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceError`] if a line total cannot be computed.
    pub fn total_price(&self) -> Result<Money<'static, Currency>, PriceError> {
        self.lines.total_price()
    }

    /// Initial fetch: marks the controller as loading for the duration of a refresh.
    pub async fn load(&mut self) -> CartOutcome {
        self.loading = true;

        let outcome = self.refresh().await;

        self.loading = false;

        outcome
    }

    /// Replace the snapshot with the backend's current cart.
    pub async fn refresh(&mut self) -> CartOutcome {
        match self.backend.fetch_cart().await {
            Ok(lines) => {
                for unreadable in lines.unreadable() {
                    warn!(
                        line = unreadable.id.as_ref().map_or("<no id>", CartLineId::as_str),
                        reason = %unreadable.reason,
                        "cart line left out"
                    );
                }

                debug!(lines = lines.len(), "cart refreshed");

                self.lines = lines;

                CartOutcome::Applied
            }
            Err(error) => {
                warn!(%error, "cart refresh skipped");

                CartOutcome::Skipped
            }
        }
    }

    /// Add one unit to a line. At the ceiling nothing is sent and a notice is raised instead.
    pub async fn increase(&mut self, line: &CartLineId, current: Quantity) -> CartOutcome {
        let Some(next) = current.increment() else {
            self.emit(CartEvent::Notice(Notice::error(MAX_QUANTITY_MESSAGE)));

            return CartOutcome::LimitReached;
        };

        self.update(line, next).await
    }

    /// Remove one unit from a line. A line holding a single unit is deleted instead.
    pub async fn decrease(&mut self, line: &CartLineId, current: Quantity) -> CartOutcome {
        match current.decrement() {
            Some(previous) => self.update(line, previous).await,
            None => self.remove(line).await,
        }
    }

    /// Delete a line, confirm with the backend's message and tell listeners the cart changed.
    pub async fn remove(&mut self, line: &CartLineId) -> CartOutcome {
        match self.backend.delete_line(line.clone()).await {
            Ok(message) => {
                let refreshed = self.refresh().await;

                self.emit(CartEvent::Notice(Notice::success(message)));
                self.emit(CartEvent::CartChanged);

                match refreshed {
                    CartOutcome::Applied => CartOutcome::Removed,
                    _ => CartOutcome::Stale,
                }
            }
            Err(error) => {
                warn!(%line, %error, "cart line delete skipped");

                CartOutcome::Skipped
            }
        }
    }

    /// Create a payment session for the whole snapshot and hand off to the hosted checkout.
    pub async fn checkout(&self) -> CartOutcome {
        let stripe = match StripeCheckout::load(&self.payments) {
            Ok(stripe) => stripe,
            Err(error) => {
                warn!(%error, "checkout skipped");

                return CartOutcome::Skipped;
            }
        };

        let session = match self
            .backend
            .create_checkout_session(self.lines.clone())
            .await
        {
            Ok(Some(session)) => session,
            Ok(None) => {
                debug!("checkout response carried no session id");

                return CartOutcome::Skipped;
            }
            Err(error) => {
                warn!(%error, "checkout session creation skipped");

                return CartOutcome::Skipped;
            }
        };

        match stripe.redirect_to_checkout(self.redirector.as_ref(), session) {
            Ok(target) => {
                info!(session_id = %target.session_id, "redirecting to hosted checkout");

                CartOutcome::Redirected(target)
            }
            Err(error) => {
                warn!(%error, "checkout redirect failed");

                CartOutcome::Skipped
            }
        }
    }

    async fn update(&mut self, line: &CartLineId, quantity: Quantity) -> CartOutcome {
        match self.backend.update_quantity(line.clone(), quantity).await {
            Ok(()) => match self.refresh().await {
                CartOutcome::Applied => CartOutcome::Applied,
                _ => CartOutcome::Stale,
            },
            Err(error) => {
                warn!(%line, %quantity, %error, "cart quantity update skipped");

                CartOutcome::Skipped
            }
        }
    }

    fn emit(&self, event: CartEvent) {
        if self.events.send(event).is_err() {
            debug!("no cart event listeners");
        }
    }
}

impl Debug for CartController {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CartController")
            .field("lines", &self.lines)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use techmart::{CartLine, Product, ProductId, QuantityError, pricing};
    use testresult::TestResult;
    use tokio::sync::mpsc::{UnboundedReceiver, error::TryRecvError, unbounded_channel};

    use crate::{
        backend::{BackendError, MockCartBackend},
        cart::events::NoticeLevel,
        payments::MockRedirector,
    };

    use super::*;

    fn line(id: &str, quantity: u8, selling_price: i64) -> Result<CartLine, QuantityError> {
        Ok(CartLine {
            id: CartLineId::new(id),
            product: Product {
                id: ProductId::new(format!("product-{id}")),
                product_name: format!("Product {id}"),
                brand_name: "TechMart".to_string(),
                category: "mobiles".to_string(),
                product_image: Vec::new(),
                description: String::new(),
                price: Decimal::new(selling_price, 0),
                selling_price: Decimal::new(selling_price, 0),
            },
            quantity: Quantity::new(quantity)?,
            user_id: None,
        })
    }

    fn payments(key: &str) -> PaymentsConfig {
        PaymentsConfig {
            stripe_public_key: key.to_string(),
            stripe_checkout_url: "https://checkout.stripe.com/pay".to_string(),
        }
    }

    fn strict_redirector() -> MockRedirector {
        let mut redirector = MockRedirector::new();

        redirector.expect_redirect().never();

        redirector
    }

    fn controller_with(
        backend: MockCartBackend,
        redirector: MockRedirector,
        lines: CartSnapshot,
    ) -> (CartController, UnboundedReceiver<CartEvent>) {
        let (events, receiver) = unbounded_channel();

        let mut controller = CartController::new(
            Arc::new(backend),
            payments("pk_test_123"),
            Arc::new(redirector),
            events,
        );

        controller.lines = lines;

        (controller, receiver)
    }

    fn rejected() -> BackendError {
        BackendError::Rejected {
            message: String::new(),
        }
    }

    #[tokio::test]
    async fn increase_below_ceiling_updates_then_refreshes_once() -> TestResult {
        for current in 1..=8_u8 {
            let id = CartLineId::new("line-1");
            let before = CartSnapshot::from(vec![line("line-1", current, 100)?]);
            let after = CartSnapshot::from(vec![line("line-1", current + 1, 100)?]);

            let mut backend = MockCartBackend::new();

            let expected_id = id.clone();
            backend
                .expect_update_quantity()
                .once()
                .withf(move |line, quantity| *line == expected_id && quantity.get() == current + 1)
                .returning(|_, _| Ok(()));

            let refreshed = after.clone();
            backend
                .expect_fetch_cart()
                .once()
                .returning(move || Ok(refreshed.clone()));

            let (mut controller, mut events) =
                controller_with(backend, strict_redirector(), before);

            let outcome = controller.increase(&id, Quantity::new(current)?).await;

            assert_eq!(outcome, CartOutcome::Applied);
            assert_eq!(controller.lines(), &after);
            assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
        }

        Ok(())
    }

    #[tokio::test]
    async fn increase_at_ceiling_sends_nothing_and_raises_one_notice() -> TestResult {
        let snapshot = CartSnapshot::from(vec![line("line-1", 9, 50)?]);

        let mut backend = MockCartBackend::new();

        backend.expect_update_quantity().never();
        backend.expect_fetch_cart().never();
        backend.expect_delete_line().never();

        let (mut controller, mut events) =
            controller_with(backend, strict_redirector(), snapshot.clone());

        let outcome = controller
            .increase(&CartLineId::new("line-1"), Quantity::MAX)
            .await;

        assert_eq!(outcome, CartOutcome::LimitReached);
        assert_eq!(controller.lines(), &snapshot);
        assert_eq!(controller.total_quantity(), 9);

        match events.try_recv() {
            Ok(CartEvent::Notice(notice)) => {
                assert_eq!(notice.level, NoticeLevel::Error);
                assert_eq!(notice.message, MAX_QUANTITY_MESSAGE);
            }
            other => panic!("expected a notice, got {other:?}"),
        }

        assert_eq!(events.try_recv(), Err(TryRecvError::Empty));

        Ok(())
    }

    #[tokio::test]
    async fn decrease_above_one_sets_quantity_minus_one() -> TestResult {
        for current in 2..=9_u8 {
            let id = CartLineId::new("line-1");

            let mut backend = MockCartBackend::new();

            backend
                .expect_update_quantity()
                .once()
                .withf(move |_, quantity| quantity.get() == current - 1)
                .returning(|_, _| Ok(()));

            let refreshed = CartSnapshot::from(vec![line("line-1", current - 1, 100)?]);
            backend
                .expect_fetch_cart()
                .once()
                .returning(move || Ok(refreshed.clone()));

            backend.expect_delete_line().never();

            let (mut controller, _events) = controller_with(
                backend,
                strict_redirector(),
                CartSnapshot::from(vec![line("line-1", current, 100)?]),
            );

            let outcome = controller.decrease(&id, Quantity::new(current)?).await;

            assert_eq!(outcome, CartOutcome::Applied);
            assert_eq!(controller.total_quantity(), u32::from(current - 1));
        }

        Ok(())
    }

    #[tokio::test]
    async fn decrease_at_one_removes_the_line() -> TestResult {
        let id = CartLineId::new("line-1");

        let mut backend = MockCartBackend::new();

        backend.expect_update_quantity().never();

        let expected_id = id.clone();
        backend
            .expect_delete_line()
            .once()
            .withf(move |line| *line == expected_id)
            .returning(|_| Ok("Product Deleted From Cart".to_string()));

        backend
            .expect_fetch_cart()
            .once()
            .returning(|| Ok(CartSnapshot::new()));

        let (mut controller, mut events) = controller_with(
            backend,
            strict_redirector(),
            CartSnapshot::from(vec![line("line-1", 1, 100)?]),
        );

        assert_eq!(controller.total_price()?, pricing::rupees(100_00));

        let outcome = controller.decrease(&id, Quantity::MIN).await;

        assert_eq!(outcome, CartOutcome::Removed);
        assert!(controller.lines().is_empty());
        assert_eq!(controller.total_price()?, pricing::zero());

        match events.try_recv() {
            Ok(CartEvent::Notice(notice)) => {
                assert_eq!(notice.level, NoticeLevel::Success);
                assert_eq!(notice.message, "Product Deleted From Cart");
            }
            other => panic!("expected a success notice, got {other:?}"),
        }

        assert_eq!(events.try_recv(), Ok(CartEvent::CartChanged));

        Ok(())
    }

    #[tokio::test]
    async fn rejected_delete_changes_nothing_and_stays_silent() -> TestResult {
        let snapshot = CartSnapshot::from(vec![line("line-1", 3, 100)?]);

        let mut backend = MockCartBackend::new();

        backend
            .expect_delete_line()
            .once()
            .returning(|_| Err(rejected()));

        backend.expect_fetch_cart().never();

        let (mut controller, mut events) =
            controller_with(backend, strict_redirector(), snapshot.clone());

        let outcome = controller.remove(&CartLineId::new("line-1")).await;

        assert_eq!(outcome, CartOutcome::Skipped);
        assert_eq!(controller.lines(), &snapshot);
        assert_eq!(events.try_recv(), Err(TryRecvError::Empty));

        Ok(())
    }

    #[tokio::test]
    async fn rejected_update_skips_refresh() -> TestResult {
        let snapshot = CartSnapshot::from(vec![line("line-1", 3, 100)?]);

        let mut backend = MockCartBackend::new();

        backend
            .expect_update_quantity()
            .once()
            .returning(|_, _| Err(rejected()));

        backend.expect_fetch_cart().never();

        let (mut controller, _events) =
            controller_with(backend, strict_redirector(), snapshot.clone());

        let outcome = controller
            .increase(&CartLineId::new("line-1"), Quantity::new(3)?)
            .await;

        assert_eq!(outcome, CartOutcome::Skipped);
        assert_eq!(controller.lines(), &snapshot);

        Ok(())
    }

    #[tokio::test]
    async fn update_with_failed_refresh_is_stale() -> TestResult {
        let snapshot = CartSnapshot::from(vec![line("line-1", 3, 100)?]);

        let mut backend = MockCartBackend::new();

        backend
            .expect_update_quantity()
            .once()
            .returning(|_, _| Ok(()));

        backend
            .expect_fetch_cart()
            .once()
            .returning(|| Err(rejected()));

        let (mut controller, _events) =
            controller_with(backend, strict_redirector(), snapshot.clone());

        let outcome = controller
            .increase(&CartLineId::new("line-1"), Quantity::new(3)?)
            .await;

        assert_eq!(outcome, CartOutcome::Stale);
        assert_eq!(controller.lines(), &snapshot);

        Ok(())
    }

    #[tokio::test]
    async fn delete_with_failed_refresh_is_stale_but_still_notifies() -> TestResult {
        let snapshot = CartSnapshot::from(vec![line("line-1", 1, 100)?]);

        let mut backend = MockCartBackend::new();

        backend
            .expect_delete_line()
            .once()
            .returning(|_| Ok("Product Deleted From Cart".to_string()));

        backend
            .expect_fetch_cart()
            .once()
            .returning(|| Err(rejected()));

        let (mut controller, mut events) =
            controller_with(backend, strict_redirector(), snapshot.clone());

        let outcome = controller.remove(&CartLineId::new("line-1")).await;

        assert_eq!(outcome, CartOutcome::Stale);
        assert_eq!(controller.lines(), &snapshot);
        assert!(
            matches!(events.try_recv(), Ok(CartEvent::Notice(_))),
            "expected the delete notice"
        );
        assert_eq!(events.try_recv(), Ok(CartEvent::CartChanged));

        Ok(())
    }

    #[tokio::test]
    async fn refresh_keeps_readable_lines_of_a_partly_bad_cart() -> TestResult {
        let fetched = CartSnapshot::from_wire(vec![
            serde_json::json!({
                "_id": "line-1",
                "quantity": 2,
                "productId": { "_id": "p1", "productName": "Pixel 8", "sellingPrice": 100 }
            }),
            serde_json::json!({ "_id": "line-2", "quantity": 10, "productId": null }),
        ]);

        let mut backend = MockCartBackend::new();

        backend
            .expect_fetch_cart()
            .once()
            .returning(move || Ok(fetched.clone()));

        let (mut controller, _events) =
            controller_with(backend, strict_redirector(), CartSnapshot::new());

        assert_eq!(controller.refresh().await, CartOutcome::Applied);
        assert_eq!(controller.lines().len(), 1);
        assert_eq!(controller.lines().unreadable().len(), 1);
        assert_eq!(controller.total_price()?, pricing::rupees(200_00));

        Ok(())
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_snapshot() -> TestResult {
        let snapshot = CartSnapshot::from(vec![line("line-1", 2, 100)?]);

        let mut backend = MockCartBackend::new();

        backend
            .expect_fetch_cart()
            .once()
            .returning(|| Err(rejected()));

        let (mut controller, _events) =
            controller_with(backend, strict_redirector(), snapshot.clone());

        assert_eq!(controller.refresh().await, CartOutcome::Skipped);
        assert_eq!(controller.lines(), &snapshot);

        Ok(())
    }

    #[tokio::test]
    async fn load_populates_snapshot_and_clears_loading() -> TestResult {
        let snapshot = CartSnapshot::from(vec![line("line-1", 2, 100)?, line("line-2", 1, 50)?]);

        let mut backend = MockCartBackend::new();

        let fetched = snapshot.clone();
        backend
            .expect_fetch_cart()
            .once()
            .returning(move || Ok(fetched.clone()));

        let (mut controller, _events) =
            controller_with(backend, strict_redirector(), CartSnapshot::new());

        assert_eq!(controller.load().await, CartOutcome::Applied);
        assert!(!controller.is_loading());
        assert_eq!(controller.total_quantity(), 3);
        assert_eq!(controller.total_price()?, pricing::rupees(250_00));

        Ok(())
    }

    #[tokio::test]
    async fn checkout_sends_snapshot_and_redirects_with_session_id() -> TestResult {
        let snapshot = CartSnapshot::from(vec![line("line-1", 2, 100)?, line("line-2", 1, 50)?]);

        let mut backend = MockCartBackend::new();

        let expected = snapshot.clone();
        backend
            .expect_create_checkout_session()
            .once()
            .withf(move |cart| *cart == expected && cart.len() == 2)
            .returning(|_| Ok(Some("sess_1".to_string())));

        let mut redirector = MockRedirector::new();

        redirector
            .expect_redirect()
            .once()
            .withf(|target| target.session_id == "sess_1")
            .returning(|_| Ok(()));

        let (controller, _events) = controller_with(backend, redirector, snapshot);

        let outcome = controller.checkout().await;

        match outcome {
            CartOutcome::Redirected(target) => {
                assert_eq!(target.session_id, "sess_1");
                assert_eq!(target.url, "https://checkout.stripe.com/pay/sess_1");
            }
            other => panic!("expected a redirect, got {other:?}"),
        }

        Ok(())
    }

    #[tokio::test]
    async fn checkout_without_session_id_does_not_redirect() -> TestResult {
        let mut backend = MockCartBackend::new();

        backend
            .expect_create_checkout_session()
            .once()
            .returning(|_| Ok(None));

        let (controller, _events) = controller_with(
            backend,
            strict_redirector(),
            CartSnapshot::from(vec![line("line-1", 1, 100)?]),
        );

        assert_eq!(controller.checkout().await, CartOutcome::Skipped);

        Ok(())
    }

    #[tokio::test]
    async fn checkout_without_publishable_key_sends_nothing() {
        let mut backend = MockCartBackend::new();

        backend.expect_create_checkout_session().never();

        let (events, _receiver) = unbounded_channel();

        let controller = CartController::new(
            Arc::new(backend),
            payments(""),
            Arc::new(strict_redirector()),
            events,
        );

        assert_eq!(controller.checkout().await, CartOutcome::Skipped);
    }

    #[tokio::test]
    async fn dropped_listener_does_not_break_removal() -> TestResult {
        let mut backend = MockCartBackend::new();

        backend
            .expect_delete_line()
            .once()
            .returning(|_| Ok("Product Deleted From Cart".to_string()));

        backend
            .expect_fetch_cart()
            .once()
            .returning(|| Ok(CartSnapshot::new()));

        let (mut controller, events) = controller_with(
            backend,
            strict_redirector(),
            CartSnapshot::from(vec![line("line-1", 1, 100)?]),
        );

        drop(events);

        assert_eq!(
            controller.remove(&CartLineId::new("line-1")).await,
            CartOutcome::Removed
        );

        Ok(())
    }
}

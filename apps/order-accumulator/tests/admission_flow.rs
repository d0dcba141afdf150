//! Admission Flow Integration Tests
//!
//! End-to-end tests driving NewOrderSingle messages through the order-entry
//! gateway and observing the execution reports and ledger state that result.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;

use chrono::Utc;
use order_accumulator::domain::ledger::{EXPOSURE_LIMIT_REJECTION, ExposureLedger};
use order_accumulator::domain::shared::Symbol;
use order_accumulator::infrastructure::fix::messages::wire;
use order_accumulator::infrastructure::fix::{
    ChannelFixSender, NewOrderSingle, OrderEntryGateway, OutboundReport, SessionId,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tokio::sync::mpsc::UnboundedReceiver;

fn make_gateway(
    limit: Decimal,
) -> (
    OrderEntryGateway<ChannelFixSender>,
    Arc<ExposureLedger>,
    UnboundedReceiver<OutboundReport>,
) {
    let ledger = Arc::new(ExposureLedger::new(limit).expect("limit is positive"));
    let (sender, rx) = ChannelFixSender::new();
    let gateway = OrderEntryGateway::new(Arc::clone(&ledger), sender);
    (gateway, ledger, rx)
}

fn order(cl_ord_id: &str, symbol: &str, side: char, qty: Decimal, price: Decimal) -> NewOrderSingle {
    NewOrderSingle {
        cl_ord_id: cl_ord_id.to_string(),
        symbol: symbol.to_string(),
        side,
        order_qty: qty,
        price,
        ord_type: Some(wire::ORD_TYPE_LIMIT),
        account: Some("ACC-1".to_string()),
        transact_time: Utc::now(),
    }
}

#[tokio::test]
async fn buys_accumulate_until_the_limit_turns_one_away() {
    let (gateway, ledger, mut rx) = make_gateway(dec!(1000));
    let session = SessionId::new("FIX.4.4:GENERATOR->ACCUMULATOR");

    // 6 * 30 = 180 notional each; the sixth would put exposure at 1080.
    for i in 0..5 {
        gateway
            .on_new_order_single(
                &order(&format!("ord-{i}"), "PETR4", wire::SIDE_BUY, dec!(6), dec!(30)),
                &session,
            )
            .await
            .unwrap();
        let outbound = rx.recv().await.unwrap();
        assert_eq!(outbound.report.ord_status, wire::ORD_STATUS_NEW);
    }

    assert_eq!(ledger.exposure(&Symbol::new("PETR4")), dec!(900));

    gateway
        .on_new_order_single(
            &order("ord-5", "PETR4", wire::SIDE_BUY, dec!(6), dec!(30)),
            &session,
        )
        .await
        .unwrap();

    let outbound = rx.recv().await.unwrap();
    assert_eq!(outbound.report.ord_status, wire::ORD_STATUS_REJECTED);
    assert_eq!(outbound.report.exec_type, wire::EXEC_TYPE_REJECTED);
    assert_eq!(
        outbound.report.text.as_deref(),
        Some(EXPOSURE_LIMIT_REJECTION)
    );

    // The rejection left nothing behind.
    assert_eq!(ledger.exposure(&Symbol::new("PETR4")), dec!(900));
    assert_eq!(ledger.orders(&Symbol::new("PETR4")).len(), 5);
}

#[tokio::test]
async fn sells_offset_buys_and_reopen_capacity() {
    let (gateway, ledger, mut rx) = make_gateway(dec!(1000));
    let session = SessionId::new("s-1");

    gateway
        .on_new_order_single(
            &order("buy-1", "VALE3", wire::SIDE_BUY, dec!(30), dec!(30)),
            &session,
        )
        .await
        .unwrap();
    assert_eq!(rx.recv().await.unwrap().report.ord_status, wire::ORD_STATUS_NEW);
    assert_eq!(ledger.exposure(&Symbol::new("VALE3")), dec!(900));

    // Another 900 buy would breach; a sell of the same size nets to zero.
    gateway
        .on_new_order_single(
            &order("sell-1", "VALE3", wire::SIDE_SELL, dec!(30), dec!(30)),
            &session,
        )
        .await
        .unwrap();
    assert_eq!(rx.recv().await.unwrap().report.ord_status, wire::ORD_STATUS_NEW);
    assert_eq!(ledger.exposure(&Symbol::new("VALE3")), Decimal::ZERO);

    // Capacity is back: the buy that would have breached now fits.
    gateway
        .on_new_order_single(
            &order("buy-2", "VALE3", wire::SIDE_BUY, dec!(30), dec!(30)),
            &session,
        )
        .await
        .unwrap();
    assert_eq!(rx.recv().await.unwrap().report.ord_status, wire::ORD_STATUS_NEW);
}

#[tokio::test]
async fn short_exposure_is_limited_in_magnitude() {
    let (gateway, ledger, mut rx) = make_gateway(dec!(500));
    let session = SessionId::new("s-1");

    gateway
        .on_new_order_single(
            &order("sell-1", "GGBR4", wire::SIDE_SELL, dec!(10), dec!(50)),
            &session,
        )
        .await
        .unwrap();
    assert_eq!(rx.recv().await.unwrap().report.ord_status, wire::ORD_STATUS_NEW);
    assert_eq!(ledger.exposure(&Symbol::new("GGBR4")), dec!(-500));

    gateway
        .on_new_order_single(
            &order("sell-2", "GGBR4", wire::SIDE_SELL, dec!(1), dec!(1)),
            &session,
        )
        .await
        .unwrap();
    assert_eq!(
        rx.recv().await.unwrap().report.ord_status,
        wire::ORD_STATUS_REJECTED
    );
}

#[tokio::test]
async fn symbols_are_limited_independently() {
    let (gateway, ledger, mut rx) = make_gateway(dec!(500));
    let session = SessionId::new("s-1");

    gateway
        .on_new_order_single(
            &order("a-1", "PETR4", wire::SIDE_BUY, dec!(10), dec!(50)),
            &session,
        )
        .await
        .unwrap();
    assert_eq!(rx.recv().await.unwrap().report.ord_status, wire::ORD_STATUS_NEW);

    // PETR4 is full; VALE3 still has its own headroom.
    gateway
        .on_new_order_single(
            &order("b-1", "VALE3", wire::SIDE_BUY, dec!(10), dec!(50)),
            &session,
        )
        .await
        .unwrap();
    assert_eq!(rx.recv().await.unwrap().report.ord_status, wire::ORD_STATUS_NEW);

    assert_eq!(ledger.exposure(&Symbol::new("PETR4")), dec!(500));
    assert_eq!(ledger.exposure(&Symbol::new("VALE3")), dec!(500));
}

#[tokio::test]
async fn raising_the_limit_admits_previously_rejected_size() {
    let (gateway, ledger, mut rx) = make_gateway(dec!(100));
    let session = SessionId::new("s-1");

    gateway
        .on_new_order_single(
            &order("big-1", "PETR4", wire::SIDE_BUY, dec!(10), dec!(50)),
            &session,
        )
        .await
        .unwrap();
    assert_eq!(
        rx.recv().await.unwrap().report.ord_status,
        wire::ORD_STATUS_REJECTED
    );

    ledger.set_max_exposure(dec!(1000)).unwrap();

    gateway
        .on_new_order_single(
            &order("big-2", "PETR4", wire::SIDE_BUY, dec!(10), dec!(50)),
            &session,
        )
        .await
        .unwrap();
    assert_eq!(rx.recv().await.unwrap().report.ord_status, wire::ORD_STATUS_NEW);
}

#[tokio::test]
async fn report_echoes_order_fields_and_carries_fresh_ids() {
    let (gateway, _ledger, mut rx) = make_gateway(dec!(100_000));
    let session = SessionId::new("s-1");

    gateway
        .on_new_order_single(
            &order("echo-1", "petr4", wire::SIDE_BUY, dec!(7), dec!(42)),
            &session,
        )
        .await
        .unwrap();

    let report = rx.recv().await.unwrap().report;
    assert_eq!(report.cl_ord_id, "echo-1");
    assert_eq!(report.symbol, "PETR4");
    assert_eq!(report.side, wire::SIDE_BUY);
    assert_eq!(report.order_qty, dec!(7));
    assert_eq!(report.leaves_qty, dec!(7));
    assert_eq!(report.cum_qty, Decimal::ZERO);
    assert_eq!(report.account.as_deref(), Some("ACC-1"));
    assert_ne!(report.order_id, "0");
    assert_ne!(report.exec_id, "0");
    assert_ne!(report.order_id, report.exec_id);
}

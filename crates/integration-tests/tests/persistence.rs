//! Persistence integration tests.
//!
//! Each test drives a [`StateStore`] over an on-disk [`DirStore`] in a
//! scratch directory, then reopens the directory with a fresh store to
//! model a process restart.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use rust_decimal::Decimal;

use lumaprint_core::{Category, Order, PosterFormat, Product, ProductId, User, UserId};
use lumaprint_integration_tests::open_at;
use lumaprint_store::kv::{DirStore, KvStore};
use lumaprint_store::slice_keys;

fn poster(id: &str, price_cents: i64) -> Product {
    Product {
        id: ProductId::new(id),
        title: format!("Poster {id}"),
        description: String::new(),
        category: Category::Films,
        price: Decimal::new(price_cents, 2),
        is_custom: false,
        image_url: None,
    }
}

#[test]
fn cart_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut state = open_at(dir.path());
        let p = poster("film-noir", 500);
        state.add_to_cart(&p, PosterFormat::A3, Decimal::ONE);
        state.add_to_cart(&p, PosterFormat::A3, Decimal::ONE);
        state.add_to_cart(&p, PosterFormat::Xl, Decimal::ONE);
    }

    let state = open_at(dir.path());
    assert_eq!(state.cart().len(), 2);
    assert_eq!(state.cart_item_count(), 3);
    assert_eq!(state.cart()[0].quantity, 2);
}

#[test]
fn catalog_edits_survive_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut state = open_at(dir.path());
        state.add_product(poster("limited-edition", 2500));
        state.delete_product(&ProductId::new("film-neon-drive"));
    }

    let state = open_at(dir.path());
    assert_eq!(state.catalog()[0].id, "limited-edition");
    assert!(state.product(&ProductId::new("film-neon-drive")).is_none());
}

#[test]
fn session_and_background_survive_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut state = open_at(dir.path());
        state.set_user(User {
            id: UserId::new("u1"),
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
        });
        state.set_studio_background(Some("bg-neon-alley".to_owned()));
    }

    let state = open_at(dir.path());
    assert_eq!(state.user().unwrap().name, "Ada");
    assert_eq!(state.studio_background(), Some("bg-neon-alley"));
}

#[test]
fn logout_removes_user_file() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut state = open_at(dir.path());
        state.set_user(User {
            id: UserId::new("u1"),
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
        });
        state.log_out();
    }

    // The key is gone from the store itself, not just the hydrated view.
    let raw = DirStore::open(dir.path()).unwrap();
    assert!(raw.get(slice_keys::USER).unwrap().is_none());

    let state = open_at(dir.path());
    assert!(state.user().is_none());
}

#[test]
fn corrupt_slices_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();

    {
        let raw = DirStore::open(dir.path()).unwrap();
        raw.set(slice_keys::CART, "42").unwrap();
        raw.set(slice_keys::CATALOG, "{\"oops\":true}").unwrap();
        raw.set(slice_keys::ORDERS, "not even json").unwrap();
    }

    let state = open_at(dir.path());
    assert!(state.cart().is_empty());
    assert!(state.orders().is_empty());
    // Catalog falls back to the built-in set, not empty.
    assert!(!state.catalog().is_empty());
}

#[test]
fn one_corrupt_slice_does_not_poison_the_others() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut state = open_at(dir.path());
        state.add_to_cart(&poster("film-noir", 500), PosterFormat::A3, Decimal::ONE);
        state.set_studio_background(Some("bg-1".to_owned()));
    }
    {
        let raw = DirStore::open(dir.path()).unwrap();
        raw.set(slice_keys::CART, "][").unwrap();
    }

    let state = open_at(dir.path());
    assert!(state.cart().is_empty());
    assert_eq!(state.studio_background(), Some("bg-1"));
}

#[test]
fn order_history_survives_restart_newest_first() {
    let dir = tempfile::tempdir().unwrap();

    let (first_id, second_id) = {
        let mut state = open_at(dir.path());

        state.add_to_cart(&poster("p1", 500), PosterFormat::A4, Decimal::ONE);
        let first = Order::new(state.cart().to_vec(), None);
        let first_id = first.id;
        state.complete_order(first).unwrap();

        state.add_to_cart(&poster("p2", 700), PosterFormat::A2, Decimal::ONE);
        let second = Order::new(state.cart().to_vec(), None);
        let second_id = second.id;
        state.complete_order(second).unwrap();

        (first_id, second_id)
    };

    let state = open_at(dir.path());
    assert_eq!(state.orders().len(), 2);
    assert_eq!(state.orders()[0].id, second_id);
    assert_eq!(state.orders()[1].id, first_id);
    assert!(state.cart().is_empty());
}

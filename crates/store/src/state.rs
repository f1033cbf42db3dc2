//! The state store: five slices, write-through persistence.
//!
//! [`StateStore`] is the single owner of all mutable shop state. Every
//! mutation goes through it, keeps the in-memory slice authoritative, and
//! rewrites that slice's key in the backing [`KvStore`]. Nothing reads the
//! store after construction; hydration happens once in [`StateStore::open`].
//!
//! Persistence is best-effort: a failed write is logged and in-memory state
//! wins, except for [`StateStore::complete_order`], whose two slice writes
//! must land together.

use rust_decimal::Decimal;
use serde::Serialize;

use lumaprint_core::{
    CartItem, Order, PosterFormat, Product, ProductId, User, UserPatch, resolve_price,
};

use crate::cart::{self, AddToCartOutcome};
use crate::catalog::default_catalog;
use crate::error::{Result, StoreError};
use crate::hydrate::hydrate;
use crate::kv::KvStore;

/// Store keys, one per persisted slice.
pub mod slice_keys {
    pub const CATALOG: &str = "lumaprint_catalog";
    pub const CART: &str = "lumaprint_cart";
    pub const USER: &str = "lumaprint_user";
    pub const ORDERS: &str = "lumaprint_orders";
    pub const STUDIO_BG: &str = "lumaprint_studio_bg";
}

/// Owner of the five persisted state slices.
///
/// Generic over the backend so tests can run against
/// [`MemoryStore`](crate::kv::MemoryStore) while production uses
/// [`DirStore`](crate::kv::DirStore).
pub struct StateStore<S: KvStore> {
    store: S,
    catalog: Vec<Product>,
    cart: Vec<CartItem>,
    user: Option<User>,
    orders: Vec<Order>,
    studio_background: Option<String>,
}

impl<S: KvStore> StateStore<S> {
    /// Hydrate all five slices from the backend.
    ///
    /// Missing or corrupt slices fall back to their defaults (built-in
    /// catalog, empty cart, no user, empty history, no background);
    /// construction never fails.
    pub fn open(store: S) -> Self {
        let catalog = hydrate(&store, slice_keys::CATALOG, default_catalog);
        let cart = hydrate(&store, slice_keys::CART, Vec::new);
        let user = hydrate(&store, slice_keys::USER, || None);
        let orders = hydrate(&store, slice_keys::ORDERS, Vec::new);
        let studio_background = hydrate(&store, slice_keys::STUDIO_BG, || None);

        Self {
            store,
            catalog,
            cart,
            user,
            orders,
            studio_background,
        }
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    /// Current catalog, most recently added first.
    #[must_use]
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    /// Current cart lines.
    #[must_use]
    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    /// Total copies in the cart, for display badges.
    #[must_use]
    pub fn cart_item_count(&self) -> u32 {
        cart::item_count(&self.cart)
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Order history, newest first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// The configured custom-print studio background identifier.
    #[must_use]
    pub fn studio_background(&self) -> Option<&str> {
        self.studio_background.as_deref()
    }

    /// Look up a catalog product by id.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.catalog.iter().find(|p| p.id == *id)
    }

    // =========================================================================
    // Cart engine
    // =========================================================================

    /// Add a product to the cart at the given format and discount
    /// multiplier.
    ///
    /// The final price is resolved now and denormalized onto the line. A
    /// repeated add of a non-custom (product, format) pair merges into the
    /// existing line, refreshing its price; custom products always append.
    /// The returned outcome carries the open-cart view hint.
    pub fn add_to_cart(
        &mut self,
        product: &Product,
        format: PosterFormat,
        multiplier: Decimal,
    ) -> AddToCartOutcome {
        let final_price = resolve_price(product, format, multiplier);
        let (next, outcome) = cart::add_line(&self.cart, product, format, final_price);

        tracing::debug!(
            product = %product.id,
            %format,
            %final_price,
            merged = outcome.merged,
            "added to cart"
        );

        self.cart = next;
        self.persist(slice_keys::CART, &self.cart);
        outcome
    }

    /// Adjust the quantity of the line matching (`id`, `format`) by
    /// `delta`, flooring at one. Missing lines are a no-op.
    pub fn update_quantity(&mut self, id: &ProductId, format: PosterFormat, delta: i64) {
        self.cart = cart::update_quantity(&self.cart, id, format, delta);
        self.persist(slice_keys::CART, &self.cart);
    }

    /// Remove the line matching (`id`, `format`). Missing lines are a
    /// no-op.
    pub fn remove_from_cart(&mut self, id: &ProductId, format: PosterFormat) {
        self.cart = cart::remove_line(&self.cart, id, format);
        self.persist(slice_keys::CART, &self.cart);
    }

    // =========================================================================
    // Catalog admin
    // =========================================================================

    /// Add a product to the catalog (newest first).
    pub fn add_product(&mut self, product: Product) {
        tracing::debug!(product = %product.id, "catalog add");
        self.catalog.insert(0, product);
        self.persist(slice_keys::CATALOG, &self.catalog);
    }

    /// Delete a product by id. A missing id is a no-op.
    pub fn delete_product(&mut self, id: &ProductId) {
        self.catalog.retain(|p| p.id != *id);
        self.persist(slice_keys::CATALOG, &self.catalog);
    }

    /// Replace the catalog with the built-in default set and clear the
    /// studio background. The two effects are coupled: a reset discards any
    /// custom studio configuration tied to the previous catalog.
    pub fn reset_catalog(&mut self) {
        tracing::debug!("catalog reset");
        self.catalog = default_catalog();
        self.studio_background = None;
        self.persist(slice_keys::CATALOG, &self.catalog);
        self.delete_key(slice_keys::STUDIO_BG);
    }

    // =========================================================================
    // Order completion
    // =========================================================================

    /// Append `order` to the history (newest first) and clear the cart, as
    /// one logical step.
    ///
    /// Both new slice values are computed and persisted before memory is
    /// touched; if either write fails, the already-written half is restored
    /// and the in-memory slices are left exactly as they were.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serializing or persisting either slice
    /// fails. On error neither the history nor the cart has changed from
    /// the caller's perspective.
    pub fn complete_order(&mut self, order: Order) -> Result<()> {
        let mut next_orders = Vec::with_capacity(self.orders.len() + 1);
        next_orders.push(order);
        next_orders.extend(self.orders.iter().cloned());
        let next_cart: Vec<CartItem> = Vec::new();

        let orders_json = serde_json::to_string(&next_orders)?;
        let cart_json = serde_json::to_string(&next_cart)?;

        self.store.set(slice_keys::ORDERS, &orders_json)?;
        if let Err(e) = self.store.set(slice_keys::CART, &cart_json) {
            // The history write landed but the cart write did not: put the
            // previous history back so the store matches memory, which we
            // never touched.
            match serde_json::to_string(&self.orders) {
                Ok(previous) => {
                    if let Err(restore_err) = self.store.set(slice_keys::ORDERS, &previous) {
                        tracing::error!(error = %restore_err, "failed to restore order history");
                    }
                }
                Err(serialize_err) => {
                    tracing::error!(error = %serialize_err, "failed to restore order history");
                }
            }
            return Err(StoreError::Persist(e));
        }

        tracing::debug!(orders = next_orders.len(), "order completed, cart cleared");
        self.orders = next_orders;
        self.cart = next_cart;
        Ok(())
    }

    // =========================================================================
    // Session user & studio background
    // =========================================================================

    /// Record the signed-in user supplied by the authentication flow.
    pub fn set_user(&mut self, user: User) {
        self.persist(slice_keys::USER, &user);
        self.user = Some(user);
    }

    /// Apply a partial profile update to the signed-in user. A no-op when
    /// nobody is signed in.
    pub fn update_user(&mut self, patch: UserPatch) {
        if let Some(user) = self.user.as_mut() {
            user.apply(patch);
            let user = user.clone();
            self.persist(slice_keys::USER, &user);
        }
    }

    /// Clear the session user and delete its store key.
    pub fn log_out(&mut self) {
        self.user = None;
        self.delete_key(slice_keys::USER);
    }

    /// Set or clear the custom-print studio background. `None` deletes the
    /// store key; "never set" and "explicitly cleared" both collapse to
    /// key-absent.
    pub fn set_studio_background(&mut self, background: Option<String>) {
        match &background {
            Some(id) => self.persist(slice_keys::STUDIO_BG, id),
            None => self.delete_key(slice_keys::STUDIO_BG),
        }
        self.studio_background = background;
    }

    // =========================================================================
    // Persistence helpers
    // =========================================================================

    /// Write a slice through to the store, best-effort. In-memory state is
    /// authoritative; failures are logged and swallowed.
    fn persist<T: Serialize>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(key, error = %e, "failed to serialize slice");
                return;
            }
        };
        if let Err(e) = self.store.set(key, &json) {
            tracing::error!(key, error = %e, "failed to persist slice");
        }
    }

    /// Delete a slice key, best-effort.
    fn delete_key(&self, key: &str) {
        if let Err(e) = self.store.delete(key) {
            tracing::error!(key, error = %e, "failed to delete slice key");
        }
    }
}

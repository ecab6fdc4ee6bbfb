//! Shared add/edit product form

use crate::forms::ProductFormState;
use leptos::prelude::*;

/// Modal form for creating or editing a product. Every field is required.
#[component]
pub fn ProductFormDialog(
    /// Mode and prefilled values
    state: ProductFormState,
) -> impl IntoView {
    let title = state.title();
    let action = state.action();
    let values = state.values;

    view! {
        <div class="modal-backdrop">
            <div class="modal-dialog">
                <h2 class="modal-title">{title}</h2>
                <form method="post" action=action class="product-form">
                    <label for="product-name">"Name"</label>
                    <input id="product-name" type="text" name="name" value=values.name required=true />

                    <label for="product-image">"Image URL"</label>
                    <input id="product-image" type="text" name="image" value=values.image required=true />

                    <label for="product-description">"Description"</label>
                    <textarea id="product-description" name="description" required=true>
                        {values.description}
                    </textarea>

                    <label for="product-category">"Category"</label>
                    <input
                        id="product-category"
                        type="text"
                        name="category"
                        value=values.category
                        required=true
                    />

                    <label for="product-price">"Price (₹)"</label>
                    <input
                        id="product-price"
                        type="number"
                        step="any"
                        name="price"
                        value=values.price.to_string()
                        required=true
                    />

                    <label for="product-stock">"Count in Stock"</label>
                    <input
                        id="product-stock"
                        type="number"
                        name="countInStock"
                        value=values.count_in_stock.to_string()
                        required=true
                    />

                    <div class="form-actions">
                        <a href="/products" class="btn btn-secondary">"Cancel"</a>
                        <button type="submit" class="btn btn-primary">"Save Product"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}

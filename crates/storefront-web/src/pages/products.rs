//! Product management page

use crate::components::{BlockingAlert, ErrorBanner, ProductFormDialog};
use crate::forms::ProductFormState;
use crate::format::price;
use crate::page_state::PageState;
use leptos::prelude::*;
use storefront_core::types::Product;

/// Product table with the add/edit form and per-row actions
#[component]
pub fn ProductsPage(
    /// Settled product list fetch
    state: PageState<Vec<Product>>,
    /// Open form, if any
    form: Option<ProductFormState>,
    /// Blocking alert from a failed action
    alert: Option<String>,
) -> impl IntoView {
    let alert = alert.map(|message| view! { <BlockingAlert message=message /> });

    if let Some(message) = state.error {
        return view! {
            {alert}
            <ErrorBanner message=message />
        }
        .into_any();
    }

    view! {
        {alert}
        <div class="page">
            <div class="page-header">
                <h1 class="page-title">"Manage Products"</h1>
                <a href="/products?form=new" class="btn btn-primary">"Add New Product"</a>
            </div>
            {form.map(|state| view! { <ProductFormDialog state=state /> })}
            <ProductTable products=state.data />
        </div>
    }
    .into_any()
}

#[component]
fn ProductTable(products: Vec<Product>) -> impl IntoView {
    let rows = if products.is_empty() {
        view! {
            <tr>
                <td colspan="4" class="empty-state">"No products found."</td>
            </tr>
        }
        .into_any()
    } else {
        products
            .into_iter()
            .map(|product| view! { <ProductRow product=product /> })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <div class="table-card">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Product Name"</th>
                        <th>"Price"</th>
                        <th>"Stock"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

#[component]
fn ProductRow(product: Product) -> impl IntoView {
    let id = urlencoding::encode(&product.id).into_owned();
    let edit_href = format!("/products?edit={id}");
    let delete_action = format!("/products/{id}/delete");

    view! {
        <tr class="product-row">
            <td>{product.name}</td>
            <td>{price(product.price)}</td>
            <td>{product.count_in_stock}</td>
            <td class="row-actions">
                <a href=edit_href class="link-primary">"Edit"</a>
                <form method="post" action=delete_action class="inline-form">
                    <button type="submit" class="link-danger">"Delete"</button>
                </form>
            </td>
        </tr>
    }
}

use crate::{api::Product, utils::format::format_price};
use leptos::*;

#[component]
pub fn ProductCard(product: Product, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <div class="card product-card h-100">
            {product.image.clone().map(|src| view! {
                <img class="card-img-top" src=src alt=product.name.clone() />
            })}
            <div class="card-body">
                <h5 class="card-title">{product.name.clone()}</h5>
                <p class="card-text mb-1">{format_price(product.price)}</p>
                <p class="card-text small text-muted">{format!("Stock: {}", product.stock)}</p>
                {children.map(|children| children())}
            </div>
        </div>
    }
}

#[component]
pub fn ProductList(#[prop(into)] products: Signal<Vec<Product>>) -> impl IntoView {
    view! {
        <div class="product-list row row-cols-2 row-cols-md-4 g-3">
            <For
                each=move || products.get()
                key=|product| product.id
                children=move |product: Product| {
                    view! {
                        <div class="col">
                            <ProductCard product=product />
                        </div>
                    }
                }
            />
        </div>
    }
}

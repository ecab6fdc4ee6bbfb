//! Side navigation rail

use leptos::prelude::*;

/// One destination of the rail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Route path
    pub href: &'static str,
    /// Link text
    pub label: &'static str,
}

/// Destinations in display order
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        href: "/dashboard",
        label: "Dashboard",
    },
    NavItem {
        href: "/system-status",
        label: "System Status",
    },
    NavItem {
        href: "/products",
        label: "Manage Products",
    },
    NavItem {
        href: "/orders",
        label: "Manage Orders",
    },
    NavItem {
        href: "/sales-report",
        label: "Sales Report",
    },
];

/// Whether `item` is the page at `path`
#[must_use]
pub fn is_active(item: &NavItem, path: &str) -> bool {
    item.href == path
}

/// Fixed navigation rail; collapses on small viewports
#[component]
pub fn NavRail(
    /// Path of the page being rendered
    #[prop(into)]
    active: String,
) -> impl IntoView {
    view! {
        <aside class="nav-rail">
            <div class="nav-brand">"Admin Panel"</div>
            <nav>
                <ul>
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let class = if is_active(item, &active) {
                                "nav-link active"
                            } else {
                                "nav-link"
                            };
                            view! {
                                <li>
                                    <a href=item.href class=class>{item.label}</a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </nav>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_path_is_active() {
        let products = NAV_ITEMS[2];
        assert!(is_active(&products, "/products"));
        assert!(!is_active(&products, "/products/abc"));
        assert!(!is_active(&products, "/dashboard"));
    }

    #[test]
    fn test_routes_are_unique() {
        for (i, a) in NAV_ITEMS.iter().enumerate() {
            for b in NAV_ITEMS.iter().skip(i + 1) {
                assert_ne!(a.href, b.href);
            }
        }
    }
}

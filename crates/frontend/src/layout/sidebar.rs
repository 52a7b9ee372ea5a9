use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<MenuItem>,
    admin_only: bool,
}

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    path: &'static str,
    label: &'static str,
    icon: &'static str,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Overview",
            items: vec![MenuItem {
                path: "/dashboard",
                label: "Dashboard",
                icon: "dashboard",
            }],
            admin_only: false,
        },
        MenuGroup {
            label: "Masters",
            items: vec![
                MenuItem {
                    path: "/masters/department",
                    label: "Departments",
                    icon: "building",
                },
                MenuItem {
                    path: "/masters/designation",
                    label: "Designations",
                    icon: "badge",
                },
                MenuItem {
                    path: "/masters/asset",
                    label: "Assets",
                    icon: "package",
                },
            ],
            admin_only: true,
        },
        MenuGroup {
            label: "Projects",
            items: vec![MenuItem {
                path: "/projects",
                label: "All Projects",
                icon: "folder",
            }],
            admin_only: true,
        },
        MenuGroup {
            label: "My Work",
            items: vec![
                MenuItem {
                    path: "/my-projects",
                    label: "My Projects",
                    icon: "folder",
                },
                MenuItem {
                    path: "/my-tasks",
                    label: "My Tasks",
                    icon: "check-square",
                },
            ],
            admin_only: false,
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();

    let visible_groups = move || {
        menu_groups()
            .into_iter()
            .filter(|group| !group.admin_only || session.is_admin())
            .collect::<Vec<_>>()
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"EMS"</div>
            <nav class="sidebar__nav">
                {move || visible_groups().into_iter().map(|group| {
                    view! {
                        <div class="sidebar__group">
                            <div class="sidebar__group-label">{group.label}</div>
                            {group.items.into_iter().map(|item| {
                                view! {
                                    <A href=item.path attr:class="sidebar__link">
                                        <span class="sidebar__link-icon">{icon(item.icon)}</span>
                                        <span class="sidebar__link-label">{item.label}</span>
                                    </A>
                                }
                            }).collect_view()}
                        </div>
                    }
                }).collect_view()}
            </nav>
        </aside>
    }
}

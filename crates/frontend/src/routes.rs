use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::domain::asset::ui::AssetMasterPage;
use crate::domain::department::ui::DepartmentMasterPage;
use crate::domain::designation::ui::DesignationMasterPage;
use crate::domain::project::ui::my_projects::MyProjectsPage;
use crate::domain::project::ui::ProjectsAdminPage;
use crate::domain::task::ui::my_tasks::MyTasksPage;
use crate::domain::task::ui::TaskBoardPage;
use crate::layout::Shell;
use crate::system::auth::guard::{RequireAdmin, RequireAuth};
use crate::system::pages::dashboard::DashboardPage;
use crate::system::pages::login::LoginPage;

/// Protected area: everything behind the auth gate shares the shell
/// (sidebar + header) and renders the matched child route inside it.
#[component]
fn ProtectedLayout() -> impl IntoView {
    view! {
        <RequireAuth>
            <Shell>
                <Outlet />
            </Shell>
        </RequireAuth>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path="/login" /> }>
                <Route path=path!("/") view=LoginPage />
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute path=path!("") view=ProtectedLayout>
                    <Route path=path!("/dashboard") view=DashboardPage />
                    <Route
                        path=path!("/masters/department")
                        view=|| view! { <RequireAdmin><DepartmentMasterPage /></RequireAdmin> }
                    />
                    <Route
                        path=path!("/masters/designation")
                        view=|| view! { <RequireAdmin><DesignationMasterPage /></RequireAdmin> }
                    />
                    <Route
                        path=path!("/masters/asset")
                        view=|| view! { <RequireAdmin><AssetMasterPage /></RequireAdmin> }
                    />
                    <Route
                        path=path!("/projects")
                        view=|| view! { <RequireAdmin><ProjectsAdminPage /></RequireAdmin> }
                    />
                    <Route path=path!("/projects/:id/tasks") view=TaskBoardPage />
                    <Route path=path!("/my-projects") view=MyProjectsPage />
                    <Route path=path!("/my-tasks") view=MyTasksPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

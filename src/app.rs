//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected::Protected;
use crate::net::types::Role;
use crate::pages::activity::ActivityPage;
use crate::pages::applicants::ApplicantsPage;
use crate::pages::applications::ApplicationsPage;
use crate::pages::bookmarks::BookmarksPage;
use crate::pages::change_password::ChangePasswordPage;
use crate::pages::edit_internship::EditInternshipPage;
use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::home::HomePage;
use crate::pages::internship_detail::InternshipDetailPage;
use crate::pages::internships::InternshipsPage;
use crate::pages::login::LoginPage;
use crate::pages::my_internships::MyInternshipsPage;
use crate::pages::post_internship::PostInternshipPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::pages::reset_password::ResetPasswordPage;
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session context and sets up client-side routing. The
/// session signal is seeded synchronously from the credential store, so a
/// cached identity is visible to the first render; the first rejected
/// authenticated call demotes it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::restored());
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/internlink.css"/>
        <Title text="InternLink"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route
                    path=(StaticSegment("reset-password"), ParamSegment("uid"), ParamSegment("token"))
                    view=ResetPasswordPage
                />

                <Route path=StaticSegment("internships") view=InternshipsPage/>
                <Route
                    path=(StaticSegment("internships"), StaticSegment("create"))
                    view=|| {
                        view! {
                            <Protected roles=vec![Role::Recruiter]>
                                <PostInternshipPage/>
                            </Protected>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("internships"), StaticSegment("mine"))
                    view=|| {
                        view! {
                            <Protected roles=vec![Role::Recruiter]>
                                <MyInternshipsPage/>
                            </Protected>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("internships"), ParamSegment("id"))
                    view=InternshipDetailPage
                />
                <Route
                    path=(StaticSegment("internships"), ParamSegment("id"), StaticSegment("edit"))
                    view=|| {
                        view! {
                            <Protected roles=vec![Role::Recruiter]>
                                <EditInternshipPage/>
                            </Protected>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("internships"), ParamSegment("id"), StaticSegment("applicants"))
                    view=|| {
                        view! {
                            <Protected roles=vec![Role::Recruiter]>
                                <ApplicantsPage/>
                            </Protected>
                        }
                    }
                />

                <Route
                    path=StaticSegment("bookmarks")
                    view=|| {
                        view! {
                            <Protected roles=vec![Role::Student]>
                                <BookmarksPage/>
                            </Protected>
                        }
                    }
                />
                <Route
                    path=StaticSegment("applications")
                    view=|| {
                        view! {
                            <Protected roles=vec![Role::Student]>
                                <ApplicationsPage/>
                            </Protected>
                        }
                    }
                />

                <Route
                    path=StaticSegment("profile")
                    view=|| {
                        view! {
                            <Protected>
                                <ProfilePage/>
                            </Protected>
                        }
                    }
                />
                <Route
                    path=StaticSegment("change-password")
                    view=|| {
                        view! {
                            <Protected>
                                <ChangePasswordPage/>
                            </Protected>
                        }
                    }
                />
                <Route
                    path=StaticSegment("activity")
                    view=|| {
                        view! {
                            <Protected>
                                <ActivityPage/>
                            </Protected>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}

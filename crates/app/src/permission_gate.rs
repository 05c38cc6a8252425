use crate::auth::use_auth;
use dioxus::prelude::*;
use shared_types::PermissionSet;

/// Resolve the current session's capabilities for this render.
pub fn use_permissions() -> PermissionSet {
    use_auth().permissions()
}

/// Render `screen` with the current permissions supplied as an argument.
///
/// Screens take a `PermissionSet` prop and never read the session
/// themselves; route components use this to inject it.
pub fn with_permissions(screen: impl FnOnce(PermissionSet) -> Element) -> Element {
    screen(use_permissions())
}

/// Conditionally render children based on a capability.
/// Shows `fallback` when `allowed` is false.
#[component]
pub fn PermissionGate(allowed: bool, fallback: Element, children: Element) -> Element {
    if allowed {
        rsx! { {children} }
    } else {
        rsx! { {fallback} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthState;
    use client::Session;
    use pretty_assertions::assert_eq;
    use shared_types::{resolve, Role};
    use std::cell::RefCell;
    use std::rc::Rc;

    type AuthSlot = Rc<RefCell<Option<AuthState>>>;

    #[component]
    fn SignedInShell() -> Element {
        let auth = use_context_provider(|| AuthState {
            session: Signal::new(None),
        });
        use_context::<AuthSlot>().borrow_mut().get_or_insert(auth);
        rsx! { UserDirectory {} }
    }

    #[component]
    fn UserDirectory() -> Element {
        with_permissions(|permissions| {
            rsx! {
                span { "admin={permissions.is_admin} super={permissions.is_super_admin}" }
                PermissionGate {
                    allowed: permissions.can_view_users,
                    fallback: rsx! { p { "Access denied" } },
                    p { "User directory" }
                }
            }
        })
    }

    fn mount() -> (VirtualDom, AuthState) {
        let slot = AuthSlot::default();
        let mut dom = VirtualDom::new(SignedInShell).with_root_context(slot.clone());
        dom.rebuild_in_place();
        let auth = slot.borrow().expect("shell provides auth state");
        (dom, auth)
    }

    fn switch_session(dom: &mut VirtualDom, mut auth: AuthState, role: Option<Role>) -> String {
        dom.in_runtime(|| match role {
            Some(role) => auth.set_session(Session {
                user_id: "u-1".into(),
                user_name: "Ada".into(),
                role,
            }),
            None => auth.clear_session(),
        });
        dom.render_immediate_to_vec();
        dioxus_ssr::render(dom)
    }

    #[test]
    fn signed_out_renders_the_fallback() {
        let (dom, _) = mount();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("admin=false super=false"), "{html}");
        assert!(html.contains("Access denied"), "{html}");
        assert!(!html.contains("User directory"), "{html}");
    }

    #[test]
    fn injected_set_matches_the_resolved_role() {
        for role in Role::ALL {
            let (mut dom, auth) = mount();
            let html = switch_session(&mut dom, auth, Some(role));
            let expected = resolve(role.as_str());

            assert_eq!(dom.in_runtime(|| auth.permissions()), expected);
            assert!(
                html.contains(&format!(
                    "admin={} super={}",
                    expected.is_admin, expected.is_super_admin
                )),
                "{role}: {html}"
            );
            assert_eq!(html.contains("User directory"), expected.can_view_users, "{role}");
            assert_eq!(html.contains("Access denied"), !expected.can_view_users, "{role}");
        }
    }

    #[test]
    fn permissions_follow_session_changes() {
        let (mut dom, auth) = mount();

        let html = switch_session(&mut dom, auth, Some(Role::Admin));
        assert!(html.contains("User directory"), "{html}");

        let html = switch_session(&mut dom, auth, Some(Role::User));
        assert!(html.contains("Access denied"), "{html}");
        assert!(html.contains("admin=false"), "{html}");

        let html = switch_session(&mut dom, auth, Some(Role::SuperAdmin));
        assert!(html.contains("admin=true super=true"), "{html}");

        let html = switch_session(&mut dom, auth, None);
        assert!(html.contains("Access denied"), "{html}");
    }
}

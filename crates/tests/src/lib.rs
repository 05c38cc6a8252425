#[cfg(test)]
mod common;

#[cfg(test)]
mod login_tests;

#[cfg(test)]
mod auth_header_tests;

#[cfg(test)]
mod session_teardown_tests;

#[cfg(test)]
mod project_list_tests;

#[cfg(test)]
mod project_detail_tests;

#[cfg(test)]
mod user_actions_tests;

#[cfg(test)]
mod dashboard_tests;

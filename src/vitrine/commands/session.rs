use crate::auth::AuthService;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;

pub fn login<B: StorageBackend>(
    auth: &mut AuthService<B>,
    email: &str,
    secret: &str,
) -> Result<CmdResult> {
    let session = auth.login(email, secret)?.clone();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Logged in as {} ({})",
        session.email, session.role
    )));
    Ok(result.with_session(session))
}

pub fn logout<B: StorageBackend>(auth: &mut AuthService<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match auth.logout() {
        Some(session) => {
            result.add_message(CmdMessage::success(format!("Logged out {}", session.email)))
        }
        None => result.add_message(CmdMessage::info("Not logged in")),
    }
    Ok(result)
}

pub fn whoami<B: StorageBackend>(auth: &AuthService<B>) -> Result<CmdResult> {
    match auth.current() {
        Some(session) => Ok(CmdResult::default().with_session(session.clone())),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info("Not logged in"));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{Role, INVALID_CREDENTIALS};
    use crate::error::VitrineError;
    use crate::store::mem_backend::MemBackend;
    use std::time::Duration;

    #[test]
    fn login_whoami_logout() {
        let backend = MemBackend::new();
        let mut auth = AuthService::restore(&backend, Duration::ZERO);

        let result = login(&mut auth, "Editor@Example.com", "x").unwrap();
        assert_eq!(result.session.as_ref().unwrap().role, Role::Editor);

        let me = whoami(&auth).unwrap();
        assert_eq!(me.session.unwrap().email, "Editor@Example.com");

        let out = logout(&mut auth).unwrap();
        assert!(out.messages[0].content.contains("Editor@Example.com"));
        assert!(whoami(&auth).unwrap().session.is_none());
    }

    #[test]
    fn rejected_login_carries_the_message() {
        let backend = MemBackend::new();
        let mut auth = AuthService::restore(&backend, Duration::ZERO);
        match login(&mut auth, "nobody@example.com", "x") {
            Err(VitrineError::AuthenticationRejected(msg)) => assert_eq!(msg, INVALID_CREDENTIALS),
            other => panic!("unexpected: {:?}", other.map(|r| r.messages)),
        }
        assert!(!backend.contains("user"));
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session restoration already started")]
    AlreadyBootstrapped,

    #[error("Bridge registration failed: {0}")]
    Registration(#[from] bridge_traits::BridgeError),
}

pub type Result<T> = std::result::Result<T, SessionError>;

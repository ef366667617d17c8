use crate::error::ClientError;

pub fn exit_code_for_error(err: &ClientError) -> i32 {
    match err {
        ClientError::InvalidUrl(_) => 3,
        ClientError::Config(_) => 2,
        ClientError::NonOkStatus(_) => 22,
        ClientError::EmptyBody => 52,
        ClientError::Io(_) => 37,
        ClientError::Serialization(_) => 26,
        ClientError::Transport(err) => transport_exit_code(err),
    }
}

fn transport_exit_code(err: &reqwest::Error) -> i32 {
    if err.is_timeout() {
        return 28;
    }
    if err.is_connect() {
        return 7;
    }
    56
}

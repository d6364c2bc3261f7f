use crate::constants::REQUEST_ID_LEN;

const ID_ALPHABET: [char; 36] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Generates a short correlation id for a logical request.
///
/// The id only appears in log spans so that the original attempt, the token
/// renewal and the replay of one dispatch can be grouped together. It is never
/// sent to the server.
///
/// # Examples
/// ```
/// use task_client::utils::id::request_id;
/// let id = request_id();
/// assert_eq!(id.len(), 8);
/// ```
#[must_use]
pub fn request_id() -> String {
    nanoid::nanoid!(REQUEST_ID_LEN, &ID_ALPHABET)
}

/// Generates a random name with the given prefix, e.g. for scratch files
#[must_use]
pub fn scratch_name(prefix: &str) -> String {
    format!("{prefix}-{}", nanoid::nanoid!(12, &ID_ALPHABET))
}

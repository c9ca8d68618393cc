use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use serde::{Deserialize, Serialize};

use crate::common::SITE;

pub fn set_local_storage<T>(key: &str, value: T)
where
    T: Serialize,
{
    let key = SITE.storage_key(key);

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

// a missing key is the normal first-visit case and is not worth a console error
pub fn get_local_storage<T>(key: &str) -> Option<T>
where
    T: for<'a> Deserialize<'a>,
{
    let key = SITE.storage_key(key);

    match LocalStorage::get(key.clone()) {
        Ok(value) => Some(value),
        Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => None,
        Err(err) => {
            console_error!(format!("Failed to fetch local storage {key}: {err}"));
            None
        }
    }
}

//! Integration tests for the SiteVault crypto module.

use sitevault::crypto::{decrypt, derive_key, encrypt, KEY_LEN};
use sitevault::errors::VaultError;

// ---------------------------------------------------------------------------
// Key derivation
// ---------------------------------------------------------------------------

#[test]
fn key_derivation_is_consistent() {
    let key1 = derive_key("MySecretPassword");
    let key2 = derive_key("MySecretPassword");
    assert_eq!(key1, key2, "same password must produce the same key");
}

#[test]
fn different_passwords_produce_different_keys() {
    let key1 = derive_key("password-one");
    let key2 = derive_key("password-two");
    assert_ne!(key1, key2);
}

#[test]
fn derived_key_has_aes256_length() {
    assert_eq!(derive_key("anything").as_bytes().len(), KEY_LEN);
    assert_eq!(KEY_LEN, 32);
}

#[test]
fn derived_key_is_sha256_of_utf8_password() {
    // SHA-256("abc"), FIPS 180-2 test vector.
    let expected = "ungWv48Bz-pBQUDeXa4iI7ADYaOWF3qctBD_YfIAFa0=";
    assert_eq!(derive_key("abc").encoded().as_str(), expected);
}

// ---------------------------------------------------------------------------
// Encryption round-trip
// ---------------------------------------------------------------------------

#[test]
fn encryption_and_decryption() {
    let key = derive_key("Master123");
    let token = encrypt("hello123", &key).expect("encrypt should succeed");
    let plain = decrypt(&token, &key).expect("decrypt should succeed");
    assert_eq!(plain, "hello123");
}

#[test]
fn non_ascii_roundtrips() {
    let key = derive_key("Master123");
    let value = "pässwörd ✓ 密码";
    let token = encrypt(value, &key).unwrap();
    assert_eq!(decrypt(&token, &key).unwrap(), value);
}

#[test]
fn encrypt_produces_different_token_each_time() {
    let key = derive_key("k");

    let t1 = encrypt("same", &key).expect("encrypt 1");
    let t2 = encrypt("same", &key).expect("encrypt 2");

    assert_ne!(t1, t2, "two encryptions of the same plaintext must differ");
    assert_eq!(decrypt(&t1, &key).unwrap(), "same");
    assert_eq!(decrypt(&t2, &key).unwrap(), "same");
}

// ---------------------------------------------------------------------------
// Failure modes
// ---------------------------------------------------------------------------

#[test]
fn different_keys_fail_to_decrypt() {
    let key1 = derive_key("Password1");
    let key2 = derive_key("Password2");
    let token = encrypt("secret", &key1).unwrap();

    let result = decrypt(&token, &key2);
    assert!(
        matches!(result, Err(VaultError::Decryption)),
        "decryption with the wrong key must fail"
    );
}

#[test]
fn truncated_token_fails() {
    let key = derive_key("k");
    let token = encrypt("VALUE=abc", &key).unwrap();

    let result = decrypt(&token[..token.len() / 2], &key);
    assert!(matches!(result, Err(VaultError::Decryption)));
}

#[test]
fn corrupted_token_fails() {
    let key = derive_key("k");
    let token = encrypt("VALUE=abc", &key).unwrap();

    // Swap one base64 character in the ciphertext region.
    let mut chars: Vec<char> = token.chars().collect();
    let idx = chars.len() - 10;
    chars[idx] = if chars[idx] == 'A' { 'B' } else { 'A' };
    let corrupted: String = chars.into_iter().collect();

    assert!(matches!(decrypt(&corrupted, &key), Err(VaultError::Decryption)));
}

#[test]
fn garbage_token_fails() {
    let key = derive_key("k");
    assert!(decrypt("not a token at all", &key).is_err());
    assert!(decrypt("", &key).is_err());
}

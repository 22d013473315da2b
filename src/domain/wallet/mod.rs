//! Wallet domain — balances, positions, and obligations for a wallet pubkey.

pub mod client;
pub mod wire;

pub use wire::{TokenAmount, WalletBalance, WalletData, WalletPosition};

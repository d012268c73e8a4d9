// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use super::{State, StateError};
use crate::{
    observer::{BalanceChange, BalanceChangeLog},
    state::{LedgerState, StateCoin},
};
use cbn_types::{Address, CoinSymbol, U256};
use primitives::Account;
use std::collections::HashMap;

fn coin(ticker: &str) -> CoinSymbol { ticker.parse().unwrap() }

fn alice() -> Address { Address::repeat_byte(0xaa) }

fn bob() -> Address { Address::repeat_byte(0xbb) }

fn funded_state() -> State {
    let mut account = Account::new_empty();
    account.nonce = 5;
    account.balance.set(coin("CBN"), U256::from(1000));
    let mut accounts = HashMap::new();
    accounts.insert(alice(), account);
    State::from_accounts(coin("CBN"), accounts)
}

#[test]
fn reads_through_to_committed_accounts() {
    let state = funded_state();
    assert!(state.exists(&alice()));
    assert!(!state.exists(&bob()));
    assert_eq!(state.balance(&alice(), &coin("CBN")), U256::from(1000));
    assert_eq!(state.balance(&alice(), &coin("GOLD")), U256::zero());
    assert_eq!(state.balance(&bob(), &coin("CBN")), U256::zero());
    assert_eq!(state.nonce(&alice()), 5);
    assert_eq!(state.nonce(&bob()), 0);
    assert!(state.dirty_accounts().is_empty());
}

#[test]
fn mutations_report_each_account_once() {
    let mut state = funded_state();
    state.sub_balance(&alice(), &coin("CBN"), &U256::from(100));
    state.set_nonce(&alice(), 6);
    state.add_balance(&bob(), &coin("CBN"), &U256::from(100));
    state.add_balance(&bob(), &coin("GOLD"), &U256::from(1));

    assert_eq!(state.dirty_accounts().len(), 2);
    assert_eq!(state.balance(&alice(), &coin("CBN")), U256::from(900));
    assert_eq!(state.balance(&bob(), &coin("CBN")), U256::from(100));
    assert_eq!(state.nonce(&alice()), 6);
}

#[test]
fn zero_amounts_do_not_create_accounts() {
    let mut state = funded_state();
    state.add_balance(&bob(), &coin("CBN"), &U256::zero());
    state.sub_balance(&alice(), &coin("CBN"), &U256::zero());
    assert!(!state.exists(&bob()));
    assert!(state.dirty_accounts().is_empty());
}

#[test]
fn commit_writes_back_and_clears() {
    let mut state = funded_state();
    state.transfer_balance(&alice(), &bob(), &coin("CBN"), &U256::from(250));

    let result = state.commit();
    let mut expected = vec![alice(), bob()];
    expected.sort();
    assert_eq!(result.updated, expected);
    assert!(result.deleted.is_empty());
    assert_eq!(result.state_root, state.state_hash());
    assert!(state.dirty_accounts().is_empty());

    assert_eq!(state.balance(&alice(), &coin("CBN")), U256::from(750));
    assert_eq!(state.balance(&bob(), &coin("CBN")), U256::from(250));

    // Nothing left to write.
    let again = state.commit();
    assert!(again.updated.is_empty());
    assert_eq!(again.state_root, result.state_root);
}

#[test]
fn commit_removes_killed_accounts() {
    let mut state = funded_state();
    state.add_balance(&bob(), &coin("CBN"), &U256::from(1));
    state.commit();

    state.kill_account(&alice());
    let result = state.commit();
    assert_eq!(result.deleted, vec![alice()]);
    assert!(!state.exists(&alice()));
    assert!(state.exists(&bob()));
}

#[test]
fn state_hash_tracks_committed_content() {
    let mut first = funded_state();
    let mut second = funded_state();
    assert_eq!(first.state_hash(), second.state_hash());

    // Same final content reached through different histories.
    first.add_balance(&bob(), &coin("CBN"), &U256::from(10));
    second.add_balance(&bob(), &coin("CBN"), &U256::from(4));
    second.add_balance(&bob(), &coin("CBN"), &U256::from(6));
    assert_eq!(first.commit().state_root, second.commit().state_root);

    let before = first.state_hash();
    first.set_nonce(&bob(), 1);
    first.commit();
    assert_ne!(first.state_hash(), before);
}

#[test]
fn balance_changes_reach_the_observer() {
    let log = BalanceChangeLog::new();
    let mut state = funded_state();
    state.set_observer(Box::new(log.clone()));

    state.sub_balance(&alice(), &coin("CBN"), &U256::from(1));
    state.set_nonce(&alice(), 9);

    assert_eq!(
        log.drain(),
        vec![BalanceChange {
            address: alice(),
            coin: coin("CBN"),
            amount: U256::from(999),
        }]
    );
}

#[test]
fn coin_registry() {
    let mut state = funded_state();
    assert!(state.coin_exists(&coin("CBN")));
    assert!(!state.coin_exists(&coin("GOLD")));

    let gold =
        StateCoin::new(coin("GOLD"), U256::from(100), U256::from(400), 50);
    state.register_coin(gold.clone()).unwrap();
    assert!(state.coin_exists(&coin("GOLD")));
    assert_eq!(state.get_state_coin(&coin("GOLD")), Some(gold.clone()));
    assert_eq!(state.get_state_coin(&coin("CBN")), None);

    assert_eq!(
        state.register_coin(gold),
        Err(StateError::CoinExists(coin("GOLD")))
    );
    assert_eq!(
        state.register_coin(StateCoin::new(
            coin("CBN"),
            U256::one(),
            U256::one(),
            50
        )),
        Err(StateError::CoinExists(coin("CBN")))
    );
    assert_eq!(
        state.register_coin(StateCoin::new(
            coin("TIN"),
            U256::one(),
            U256::one(),
            5
        )),
        Err(StateError::InvalidCrr(5))
    );
}

#[test]
fn delegation_accumulates_stakes() {
    let mut state = funded_state();
    let pub_key = vec![0x11; 32];
    state.register_candidate(pub_key.clone(), bob()).unwrap();
    assert!(matches!(
        state.register_candidate(pub_key.clone(), alice()),
        Err(StateError::CandidateExists(_))
    ));

    state.delegate(&alice(), &pub_key, &coin("CBN"), &U256::from(10));
    state.delegate(&alice(), &pub_key, &coin("CBN"), &U256::from(5));
    state.delegate(&bob(), &pub_key, &coin("CBN"), &U256::from(1));

    let candidate = state.candidate(&pub_key).unwrap();
    assert_eq!(candidate.owner, bob());
    assert_eq!(candidate.stakes.len(), 2);
    assert_eq!(candidate.stake_of(&alice(), &coin("CBN")), U256::from(15));
    assert!(!state.candidate_exists(&[0x22; 32]));
}

#[test]
fn overlay_never_touches_the_base() {
    let mut state = funded_state();
    let pub_key = vec![0x11; 32];
    state.register_candidate(pub_key.clone(), bob()).unwrap();

    {
        let mut overlay = state.copy_on_write();
        overlay.sub_balance(&alice(), &coin("CBN"), &U256::from(400));
        overlay.add_balance(&bob(), &coin("CBN"), &U256::from(400));
        overlay.set_nonce(&alice(), 6);
        overlay.delegate(&alice(), &pub_key, &coin("CBN"), &U256::from(7));

        assert_eq!(
            overlay.get_balance(&alice(), &coin("CBN")),
            U256::from(600)
        );
        assert_eq!(overlay.get_balance(&bob(), &coin("CBN")), U256::from(400));
        assert_eq!(overlay.get_nonce(&alice()), 6);
        assert_eq!(overlay.dirty_accounts().len(), 2);
        assert_eq!(
            overlay
                .candidate(&pub_key)
                .unwrap()
                .stake_of(&alice(), &coin("CBN")),
            U256::from(7)
        );
    }

    assert_eq!(state.balance(&alice(), &coin("CBN")), U256::from(1000));
    assert!(!state.exists(&bob()));
    assert_eq!(state.nonce(&alice()), 5);
    assert!(state.dirty_accounts().is_empty());
    assert!(state.candidate(&pub_key).unwrap().stakes.is_empty());
}

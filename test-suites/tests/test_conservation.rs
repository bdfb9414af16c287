use proptest::prelude::*;
use test_suites::test_fixture::TestFixture;
use test_suites::ONE;

#[derive(Clone, Debug)]
enum Action {
    Deposit { user: usize, vault: u32, amount: i128 },
    Withdraw { user: usize, vault: u32, percent: i128 },
    Transfer { from: usize, to: usize, vault: u32, percent: i128 },
    Harvest { vault: u32, amount: i128 },
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0..3usize, 0..2u32, 1..1_000 * ONE)
            .prop_map(|(user, vault, amount)| Action::Deposit { user, vault, amount }),
        (0..3usize, 0..2u32, 1..=100i128)
            .prop_map(|(user, vault, percent)| Action::Withdraw { user, vault, percent }),
        (0..3usize, 0..3usize, 0..2u32, 1..=100i128).prop_map(|(from, to, vault, percent)| {
            Action::Transfer {
                from,
                to,
                vault,
                percent,
            }
        }),
        (0..2u32, 0..100 * ONE).prop_map(|(vault, amount)| Action::Harvest { vault, amount }),
    ]
}

const PRICE_SCALAR: i128 = 1_000_000_000;

/// Underlying per share, `None` while the vault has no shares
fn share_price(fixture: &TestFixture, vault_id: u32) -> Option<i128> {
    let supply = fixture.chef.total_supply(&vault_id);
    if supply == 0 {
        return None;
    }
    Some(fixture.chef.total_underlying(&vault_id) * PRICE_SCALAR / supply)
}

fn apply(fixture: &TestFixture, action: &Action) {
    let users = &fixture.users;
    match *action {
        Action::Deposit {
            user,
            vault,
            amount,
        } => {
            let _ = fixture.chef.try_deposit(&users[user], &vault, &amount);
        }
        Action::Withdraw {
            user,
            vault,
            percent,
        } => {
            let shares = fixture.chef.balance(&users[user], &vault) * percent / 100;
            let _ = fixture
                .chef
                .try_withdraw_shares(&users[user], &vault, &shares, &0);
        }
        Action::Transfer {
            from,
            to,
            vault,
            percent,
        } => {
            let shares = fixture.chef.balance(&users[from], &vault) * percent / 100;
            let _ = fixture
                .chef
                .try_transfer_shares(&users[from], &users[to], &vault, &shares);
        }
        Action::Harvest { vault, amount } => {
            if amount > 0 {
                fixture.queue_yield(vault, amount);
            }
            let _ = fixture.chef.try_harvest(&users[0], &vault);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_shares_and_underlying_are_conserved(actions in prop::collection::vec(action(), 1..20)) {
        let mut fixture = TestFixture::create();
        fixture.create_vault(1000);
        fixture.create_vault(250);
        for _ in 0..3 {
            fixture.create_user(10_000 * ONE);
        }

        for action in actions.iter() {
            let harvested = match *action {
                Action::Harvest { vault, .. } => {
                    share_price(&fixture, vault).map(|price| (vault, price))
                }
                _ => None,
            };
            apply(&fixture, action);
            if let Some((vault_id, before)) = harvested {
                let after = share_price(&fixture, vault_id).unwrap_or(before);
                prop_assert!(after >= before, "share price dropped from {} to {}", before, after);
            }
            for vault_id in 0..2u32 {
                let supply = fixture.chef.total_supply(&vault_id);
                prop_assert_eq!(fixture.sum_of_balances(vault_id), supply);
            }
            // funds only pass through the chef while no vault is panicked
            prop_assert_eq!(fixture.token.balance(&fixture.chef.address), 0);
        }

        // every holder can always leave
        let mut holders = fixture.users.clone();
        holders.push(fixture.owner.clone());
        for vault_id in 0..2u32 {
            for holder in holders.iter() {
                let shares = fixture.chef.balance(holder, &vault_id);
                if shares > 0 {
                    let expected = fixture.chef.preview_withdraw(&vault_id, &shares);
                    let paid = fixture.chef.withdraw_shares(holder, &vault_id, &shares, &expected);
                    prop_assert_eq!(paid, expected);
                }
            }
            prop_assert_eq!(fixture.chef.total_supply(&vault_id), 0);
        }
    }
}

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use test_suites::test_fixture::TestFixture;
use test_suites::ONE;

#[derive(Arbitrary, Debug)]
enum Command {
    Deposit { user: u8, vault: bool, amount: u64 },
    DepositShares { user: u8, vault: bool, shares: u64 },
    Withdraw { user: u8, vault: bool, percent: u8 },
    Transfer { from: u8, to: u8, vault: bool, percent: u8 },
    Harvest { vault: bool, amount: u64 },
    Pause { vault: bool, pause: bool },
    Panic { vault: bool },
    Jump { seconds: u16 },
}

#[derive(Arbitrary, Debug)]
struct Input {
    fee_bps: u16,
    commands: Vec<Command>,
}

fn vault_id(vault: bool) -> u32 {
    vault as u32
}

fuzz_target!(|input: Input| {
    let mut fixture = TestFixture::create();
    fixture.create_vault((input.fee_bps % 1001) as u32);
    fixture.create_vault(1000);
    for _ in 0..3 {
        fixture.create_user(1_000_000 * ONE);
    }
    let users = fixture.users.clone();
    let user = |index: u8| &users[index as usize % users.len()];

    for command in input.commands.iter().take(32) {
        match *command {
            Command::Deposit { user: u, vault, amount } => {
                let _ = fixture
                    .chef
                    .try_deposit(user(u), &vault_id(vault), &(amount as i128));
            }
            Command::DepositShares { user: u, vault, shares } => {
                let _ = fixture.chef.try_deposit_shares(
                    user(u),
                    &vault_id(vault),
                    &(shares as i128),
                    &i128::MAX,
                );
            }
            Command::Withdraw { user: u, vault, percent } => {
                let balance = fixture.chef.balance(user(u), &vault_id(vault));
                let shares = balance * (percent % 101) as i128 / 100;
                let _ = fixture
                    .chef
                    .try_withdraw_shares(user(u), &vault_id(vault), &shares, &0);
            }
            Command::Transfer { from, to, vault, percent } => {
                let balance = fixture.chef.balance(user(from), &vault_id(vault));
                let shares = balance * (percent % 101) as i128 / 100;
                let _ = fixture
                    .chef
                    .try_transfer_shares(user(from), user(to), &vault_id(vault), &shares);
            }
            Command::Harvest { vault, amount } => {
                let vault = vault_id(vault);
                if fixture.chef.vault_info(&vault).status == vault_chef::VaultStatus::Active
                    && amount > 0
                {
                    fixture.queue_yield(vault, amount as i128);
                }
                let _ = fixture.chef.try_harvest(user(0), &vault);
            }
            Command::Pause { vault, pause } => {
                let _ = fixture.chef.try_pause_vault(&vault_id(vault), &pause);
            }
            Command::Panic { vault } => {
                let _ = fixture.chef.try_panic_vault(&vault_id(vault));
            }
            Command::Jump { seconds } => fixture.jump(seconds as u64),
        }

        for vault in 0..2u32 {
            assert_eq!(fixture.sum_of_balances(vault), fixture.chef.total_supply(&vault));
        }
        assert!(fixture.token.balance(&fixture.chef.address) >= fixture.read_reserved());
    }

    // every holder can always leave
    let mut holders = users.clone();
    holders.push(fixture.owner.clone());
    for vault in 0..2u32 {
        for holder in holders.iter() {
            if fixture.chef.balance(holder, &vault) > 0 {
                fixture.chef.emergency_withdraw(holder, &vault);
            }
        }
        assert_eq!(fixture.chef.total_supply(&vault), 0);
    }
});

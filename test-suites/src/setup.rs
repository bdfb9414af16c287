use crate::test_fixture::TestFixture;
use crate::ONE;

/// Two vaults over the same underlying, 5% and 1% fees, with three funded users and a
/// first deposit in each vault
pub fn create_fixture_with_data<'a>() -> TestFixture<'a> {
    let mut fixture = TestFixture::create();

    fixture.create_vault(500);
    fixture.create_vault(100);

    let samwise = fixture.create_user(100 * ONE);
    let frodo = fixture.create_user(100 * ONE);
    fixture.create_user(100 * ONE);

    fixture.chef.deposit(&samwise, &0, &(10 * ONE));
    fixture.chef.deposit(&frodo, &1, &(10 * ONE));

    fixture
}

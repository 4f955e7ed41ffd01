//! Population conservation under the shift operators, on real census data.

use hr_algo::{
    shift_pop_from_entire_us_to_state, shift_pop_from_entire_us_to_state_by_global_percentage,
    shift_pop_from_state_to_entire_us, shift_pop_from_state_to_state,
};
use hr_core::{House, PopType, St, Year, POP_TOLERANCE_MILLIONS};
use proptest::prelude::*;

fn house_2020() -> House {
    let table = hr_io::load_states_true().unwrap();
    House::new(&table, Year::Y2020, PopType::Apportionment).unwrap()
}

fn state_index() -> impl Strategy<Value = St> {
    (0..St::ALL.len()).prop_map(|i| St::ALL[i])
}

proptest! {
    #[test]
    fn out_shift_conserves_total(st in state_index(), percent in 0.0f64..=1.0) {
        let mut house = house_2020();
        let before = house.total_pop();
        shift_pop_from_state_to_entire_us(&mut house, st, percent);
        prop_assert!((house.total_pop() - before).abs() < POP_TOLERANCE_MILLIONS);
    }

    #[test]
    fn in_shift_conserves_total(st in state_index(), percent in 0.0f64..=0.9) {
        let mut house = house_2020();
        let before = house.total_pop();
        shift_pop_from_entire_us_to_state_by_global_percentage(&mut house, st, percent);
        prop_assert!((house.total_pop() - before).abs() < POP_TOLERANCE_MILLIONS);
    }

    #[test]
    fn signed_amount_shift_conserves_total(
        st in state_index(),
        millions in -0.5f64..=5.0,
    ) {
        let mut house = house_2020();
        let before = house.total_pop();
        // Negative draws may be infeasible for the smallest states; both
        // outcomes must leave the total untouched on success.
        if shift_pop_from_entire_us_to_state(&mut house, st, millions).is_ok() {
            prop_assert!((house.total_pop() - before).abs() < POP_TOLERANCE_MILLIONS);
        }
    }

    #[test]
    fn chained_shifts_conserve_total(
        a in state_index(),
        b in state_index(),
        percent in 0.0f64..=0.5,
    ) {
        let mut house = house_2020();
        let before = house.total_pop();
        shift_pop_from_state_to_state(&mut house, a, b, percent);
        shift_pop_from_state_to_entire_us(&mut house, b, percent);
        shift_pop_from_entire_us_to_state_by_global_percentage(&mut house, a, percent / 2.0);
        prop_assert!((house.total_pop() - before).abs() < POP_TOLERANCE_MILLIONS);
    }
}

//! Mutation API tests for the recipe step table

use galley_operation::Operation;
use galley_recipe::Recipe;
use galley_test_utils::TagOperation;
use proptest::prelude::*;
use std::sync::Arc;

fn tag(label: &str) -> Arc<dyn Operation> {
    Arc::new(TagOperation::new(label))
}

fn recipe_of(len: usize) -> Recipe {
    Recipe::new((0..len).map(|i| tag(&i.to_string())).collect())
}

fn breakpoint_states(recipe: &Recipe) -> Vec<bool> {
    (0..recipe.len())
        .map(|i| recipe.flags(i).expect("step exists").breakpoint)
        .collect()
}

#[test]
fn appending_increases_count_by_one() {
    let recipe = Recipe::new(Vec::new());
    assert!(recipe.is_empty());

    recipe.add_operation(tag("a"));

    assert_eq!(recipe.len(), 1);
    assert_eq!(recipe.operation(0).expect("step exists").name(), "Tag a");
}

#[test]
fn appending_preserves_prior_order() {
    let recipe = Recipe::new(vec![tag("a"), tag("b")]);
    recipe.add_operation(tag("c"));

    let names: Vec<String> = (0..recipe.len())
        .map(|i| recipe.operation(i).expect("step exists").name().to_string())
        .collect();
    assert_eq!(names, ["Tag a", "Tag b", "Tag c"]);
}

#[test]
fn batch_append_preserves_relative_order() {
    let recipe = Recipe::new(Vec::new());
    recipe.add_operations(vec![tag("a"), tag("b"), tag("c"), tag("d")]);

    assert_eq!(recipe.len(), 4);
    assert_eq!(recipe.operation(3).expect("step exists").name(), "Tag d");
}

#[test]
fn empty_batch_is_a_no_op() {
    let recipe = recipe_of(4);
    recipe.add_operations(Vec::new());
    assert_eq!(recipe.len(), 4);
}

#[test]
fn breakpoint_toggle_restores_original_state() {
    let recipe = recipe_of(1);
    assert!(!recipe.flags(0).expect("step exists").breakpoint);

    recipe.set_breakpoint(0, true);
    assert!(recipe.flags(0).expect("step exists").breakpoint);

    recipe.set_breakpoint(0, false);
    assert!(!recipe.flags(0).expect("step exists").breakpoint);
}

#[test]
fn out_of_range_breakpoint_is_silently_ignored() {
    let recipe = recipe_of(2);

    recipe.set_breakpoint(5, true);

    assert_eq!(recipe.len(), 2);
    assert_eq!(breakpoint_states(&recipe), [false, false]);
    assert_eq!(recipe.flags(5), None);
}

#[test]
fn disabled_and_flow_control_setters_address_by_index() {
    let recipe = recipe_of(3);

    recipe.set_disabled(1, true);
    recipe.set_flow_control(2, true);

    assert!(recipe.flags(1).expect("step exists").disabled);
    assert!(recipe.flags(2).expect("step exists").flow_control);
    assert_eq!(recipe.flags(0), Some(Default::default()));

    // Same tolerant out-of-range contract as set_breakpoint.
    recipe.set_disabled(9, true);
    recipe.set_flow_control(9, true);
    assert_eq!(recipe.len(), 3);
}

#[test]
fn remove_breakpoints_clears_only_the_prefix() {
    let recipe = recipe_of(4);
    for index in 0..recipe.len() {
        recipe.set_breakpoint(index, true);
    }

    recipe.remove_breakpoints(2);

    assert_eq!(breakpoint_states(&recipe), [false, false, true, true]);
}

#[test]
fn remove_breakpoints_past_the_end_clears_all() {
    let recipe = recipe_of(3);
    for index in 0..recipe.len() {
        recipe.set_breakpoint(index, true);
    }

    recipe.remove_breakpoints(100);

    assert_eq!(breakpoint_states(&recipe), [false, false, false]);
}

proptest! {
    #[test]
    fn prop_remove_breakpoints_is_a_prefix_window(len in 0usize..16, up_to in 0usize..32) {
        let recipe = recipe_of(len);
        for index in 0..len {
            recipe.set_breakpoint(index, true);
        }

        recipe.remove_breakpoints(up_to);

        for (index, state) in breakpoint_states(&recipe).iter().enumerate() {
            prop_assert_eq!(*state, index >= up_to);
        }
    }

    #[test]
    fn prop_out_of_range_setters_never_change_length(len in 0usize..8, index in 8usize..64) {
        let recipe = recipe_of(len);

        recipe.set_breakpoint(index, true);
        recipe.set_disabled(index, true);
        recipe.set_flow_control(index, true);

        prop_assert_eq!(recipe.len(), len);
    }
}

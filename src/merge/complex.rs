use crate::merge::strategy::StrategyTable;
use crate::props::Props;
use std::collections::BTreeSet;

/// Merge two props maps key by key using the standard strategy table.
pub fn merge_complex_props(base: &Props, overriding: &Props, is_hard: bool) -> Props {
	merge_with_table(StrategyTable::standard(), base, overriding, is_hard)
}

/// Merge two props maps key by key, choosing each key's strategy from `table`.
///
/// The result has exactly the union of both key sets.
pub fn merge_with_table(
	table: &StrategyTable,
	base: &Props,
	overriding: &Props,
	is_hard: bool,
) -> Props {
	let keys: BTreeSet<&String> = base.keys().chain(overriding.keys()).collect();

	keys.into_iter()
		.map(|key| {
			let strategy = table.strategy_for(key);
			tracing::trace!(key = %key, strategy = strategy.name(), "merging prop");
			let merged = strategy.apply(base.get(key), overriding.get(key), is_hard);
			(key.clone(), merged)
		})
		.collect()
}

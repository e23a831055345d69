//! Sort strategies permuting an index buffer with a comparator that dereferences into the data.
//!
//! A [`SortStrategy`] only ever reorders the indices it is handed. It is the seam where the
//! execution strategy (sequential or parallel, stable or not) is chosen, see
//! [`Argsort1Ext::argsort_into_with`](crate::Argsort1Ext::argsort_into_with).

use core::cmp::Ordering;
use ndarray::ArrayView1;

/// Execution strategy permuting `indexes` into sorted order according to `compare`.
///
/// Implementations must not change the multiset of `indexes`, they may only reorder it.
pub trait SortStrategy {
	/// Whether equal elements are guaranteed to keep their original relative order.
	const STABLE: bool;

	/// Sorts `indexes` with a comparator function.
	///
	/// The comparator function must define a total ordering for the indexed elements. If the
	/// ordering is not total, the order of the indexes is unspecified.
	fn sort_indexes_by<F>(&self, indexes: &mut [usize], compare: F)
	where
		F: Fn(&usize, &usize) -> Ordering + Sync;
}

/// Sequential stable sort.
///
/// The current algorithm is the adaptive, iterative merge sort of [`slice::sort_by`]. It
/// allocates temporary storage but ties keep their original relative order, so the resulting
/// permutation is deterministic.
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Stable;

#[cfg(feature = "alloc")]
impl SortStrategy for Stable {
	const STABLE: bool = true;

	#[inline]
	fn sort_indexes_by<F>(&self, indexes: &mut [usize], compare: F)
	where
		F: Fn(&usize, &usize) -> Ordering + Sync,
	{
		indexes.sort_by(compare);
	}
}

/// Sequential unstable sort.
///
/// The current algorithm is the pattern-defeating quicksort of [`slice::sort_unstable_by`]. It
/// does not allocate and hence is the only strategy available without the `alloc` feature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Unstable;

impl SortStrategy for Unstable {
	const STABLE: bool = false;

	#[inline]
	fn sort_indexes_by<F>(&self, indexes: &mut [usize], compare: F)
	where
		F: Fn(&usize, &usize) -> Ordering + Sync,
	{
		indexes.sort_unstable_by(compare);
	}
}

/// Parallel unstable sort on the current [`rayon`] thread pool.
///
/// The current algorithm is the parallel pattern-defeating quicksort of
/// [`rayon::slice::ParallelSliceMut::par_sort_unstable_by`]. It does not allocate. The order of
/// equal elements is unspecified and may differ between runs or thread pool sizes.
#[cfg(feature = "rayon")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Parallel;

#[cfg(feature = "rayon")]
impl SortStrategy for Parallel {
	const STABLE: bool = false;

	#[inline]
	fn sort_indexes_by<F>(&self, indexes: &mut [usize], compare: F)
	where
		F: Fn(&usize, &usize) -> Ordering + Sync,
	{
		use rayon::slice::ParallelSliceMut;

		indexes.par_sort_unstable_by(compare);
	}
}

/// Parallel buffered sort on the current [`rayon`] thread pool.
///
/// The current algorithm is the parallel merge sort of
/// [`rayon::slice::ParallelSliceMut::par_sort_by`]. The array is first divided into chunks that
/// are sorted in parallel, then the chunks are merged in parallel through a temporary buffer the
/// size of `indexes`. It tends to outperform [`Parallel`] when comparisons are cheap and memory
/// bandwidth dominates.
///
/// The order of equal elements is unspecified, just like with [`Parallel`].
#[cfg(feature = "rayon")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ParallelBuffered;

#[cfg(feature = "rayon")]
impl SortStrategy for ParallelBuffered {
	// Merging happens to keep ties in order but this is not part of the contract.
	const STABLE: bool = false;

	#[inline]
	fn sort_indexes_by<F>(&self, indexes: &mut [usize], compare: F)
	where
		F: Fn(&usize, &usize) -> Ordering + Sync,
	{
		use rayon::slice::ParallelSliceMut;

		indexes.par_sort_by(compare);
	}
}

/// Overwrites `indexes` with the identity permutation.
#[inline]
pub(crate) fn identity(indexes: &mut [usize]) {
	for (i, index) in indexes.iter_mut().enumerate() {
		*index = i;
	}
}

/// Writes the argsort of `v` with an arbitrary `strategy` into `indexes`.
///
/// Panics when the lengths of `v` and `indexes` differ.
pub(crate) fn argsort_view_into_with<T, St, F>(
	v: ArrayView1<'_, T>,
	strategy: St,
	indexes: &mut [usize],
	compare: F,
) where
	T: Sync,
	St: SortStrategy,
	F: Fn(&T, &T) -> Ordering + Sync,
{
	assert_eq!(
		indexes.len(),
		v.len(),
		"length of indexes must match length of array"
	);
	identity(indexes);
	// Checked indexing, `strategy` is not trusted to only permute.
	strategy.sort_indexes_by(indexes, |&i, &j| compare(&v[i], &v[j]));
}

//! Argument sorting of plain slices.
//!
//! These are shorthands for viewing a slice as [`ArrayView1`] and calling the respective method of
//! [`Argsort1Ext`](crate::Argsort1Ext), returning a [`Vec`] instead of an [`Array1`].
//!
//! [`Array1`]: ndarray::Array1

#![cfg(feature = "alloc")]

use crate::strategy::{SortStrategy, argsort_view_into_with, identity};
use alloc::{vec, vec::Vec};
use core::{cmp::Ordering, mem};
use ndarray::ArrayView1;

/// Returns the indexes that sort `v`.
///
/// This sort is stable (i.e., equal elements keep their original relative order) and
/// *O*(*n* log *n*) worst-case.
///
/// # Examples
///
/// ```
/// use ndarray_argsort::sort_indexes::sort_indexes;
///
/// assert_eq!(sort_indexes(&[3, 1, 2]), [1, 2, 0]);
/// assert_eq!(sort_indexes(&[5, 5, 1]), [2, 0, 1]);
/// assert!(sort_indexes::<u8>(&[]).is_empty());
/// ```
#[inline]
pub fn sort_indexes<T>(v: &[T]) -> Vec<usize>
where
	T: Ord,
{
	argsort_view_by(ArrayView1::from(v), T::cmp)
}

/// Returns the indexes that sort `v` with a comparator function.
///
/// This sort is stable (i.e., equal elements keep their original relative order) and
/// *O*(*n* log *n*) worst-case.
///
/// # Examples
///
/// ```
/// use ndarray_argsort::sort_indexes::sort_indexes_by;
///
/// let floats = [2.5f64, -1.0, 0.0];
/// assert_eq!(sort_indexes_by(&floats, f64::total_cmp), [1, 2, 0]);
/// ```
#[inline]
pub fn sort_indexes_by<T, F>(v: &[T], compare: F) -> Vec<usize>
where
	F: FnMut(&T, &T) -> Ordering,
{
	argsort_view_by(ArrayView1::from(v), compare)
}

/// Returns the indexes that sort `v` in parallel.
///
/// This sort is unstable (i.e., the order of equal elements is unspecified and may differ between
/// runs) and *O*(*n* log *n*) worst-case.
///
/// # Examples
///
/// ```
/// use ndarray_argsort::sort_indexes::sort_indexes_parallel;
///
/// assert_eq!(sort_indexes_parallel(&[3, 1, 2]), [1, 2, 0]);
/// assert_eq!(sort_indexes_parallel(&[5, 5, 1])[0], 2);
/// ```
#[cfg(feature = "rayon")]
#[inline]
pub fn sort_indexes_parallel<T>(v: &[T]) -> Vec<usize>
where
	T: Ord + Sync,
{
	argsort_view_with(ArrayView1::from(v), crate::strategy::Parallel, T::cmp)
}

/// Returns the indexes that sort `v` in parallel with a comparator function.
///
/// This sort is unstable (i.e., the order of equal elements is unspecified and may differ between
/// runs) and *O*(*n* log *n*) worst-case.
#[cfg(feature = "rayon")]
#[inline]
pub fn sort_indexes_parallel_by<T, F>(v: &[T], compare: F) -> Vec<usize>
where
	T: Sync,
	F: Fn(&T, &T) -> Ordering + Sync,
{
	argsort_view_with(ArrayView1::from(v), crate::strategy::Parallel, compare)
}

/// Returns the indexes that sort `v` in parallel using a temporary buffer.
///
/// This sort is unstable (i.e., the order of equal elements is unspecified) and *O*(*n* log *n*)
/// worst-case. It allocates temporary storage the size of `v`. See
/// [`ParallelBuffered`](crate::strategy::ParallelBuffered).
///
/// # Examples
///
/// ```
/// use ndarray_argsort::sort_indexes::sort_indexes_parallel_buffered;
///
/// assert_eq!(sort_indexes_parallel_buffered(&[3, 1, 2]), [1, 2, 0]);
/// ```
#[cfg(feature = "rayon")]
#[inline]
pub fn sort_indexes_parallel_buffered<T>(v: &[T]) -> Vec<usize>
where
	T: Ord + Sync,
{
	argsort_view_with(
		ArrayView1::from(v),
		crate::strategy::ParallelBuffered,
		T::cmp,
	)
}

/// Returns the indexes that sort `v` in parallel using a temporary buffer with a comparator
/// function.
///
/// This sort is unstable (i.e., the order of equal elements is unspecified) and *O*(*n* log *n*)
/// worst-case.
#[cfg(feature = "rayon")]
#[inline]
pub fn sort_indexes_parallel_buffered_by<T, F>(v: &[T], compare: F) -> Vec<usize>
where
	T: Sync,
	F: Fn(&T, &T) -> Ordering + Sync,
{
	argsort_view_with(ArrayView1::from(v), crate::strategy::ParallelBuffered, compare)
}

/// Checks if `indexes` is a permutation of `0..indexes.len()`, i.e., every index appears exactly
/// once.
///
/// # Examples
///
/// ```
/// use ndarray_argsort::sort_indexes::is_permutation;
///
/// assert!(is_permutation(&[1, 2, 0]));
/// assert!(!is_permutation(&[1, 1, 0]));
/// assert!(!is_permutation(&[1, 3, 0]));
/// assert!(is_permutation(&[]));
/// ```
pub fn is_permutation(indexes: &[usize]) -> bool {
	let mut seen = vec![false; indexes.len()];
	indexes.iter().all(|&index| {
		seen.get_mut(index)
			.is_some_and(|flag| !mem::replace(flag, true))
	})
}

/// Stable argsort of `v`, the comparator may be stateful.
pub(crate) fn argsort_view_by<T, F>(v: ArrayView1<'_, T>, mut compare: F) -> Vec<usize>
where
	F: FnMut(&T, &T) -> Ordering,
{
	let mut indexes = vec![0; v.len()];
	identity(&mut indexes);
	// SAFETY: The sort only permutes the identity, hence `i, j < v.len()`.
	indexes.sort_by(|&i, &j| unsafe { compare(v.uget(i), v.uget(j)) });
	indexes
}

/// Argsort of `v` with an arbitrary `strategy`.
pub(crate) fn argsort_view_with<T, St, F>(
	v: ArrayView1<'_, T>,
	strategy: St,
	compare: F,
) -> Vec<usize>
where
	T: Sync,
	St: SortStrategy,
	F: Fn(&T, &T) -> Ordering + Sync,
{
	let mut indexes = vec![0; v.len()];
	argsort_view_into_with(v, strategy, &mut indexes, compare);
	indexes
}

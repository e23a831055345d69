//! Argument sorting (i.e., [argsort]) of slices and non-contiguous (sub)views into
//! *n*-dimensional arrays. Computes the permutation of indices that sorts the elements without
//! rearranging them, sequentially or in parallel via
#![cfg_attr(feature = "rayon", doc = "[`rayon`].")]
#![cfg_attr(not(feature = "rayon"), doc = "`rayon`.")]
//!
//! # Example
//!
//! ```
//! use ndarray_argsort::{Argsort1Ext, ndarray::{arr1, arr2, Axis}};
//!
//! // 2-dimensional array of 4 rows and 5 columns.
//! let v = arr2(&[[-5, 4, 1, -3,  2],   // row 0, axis 0
//!                [ 8, 3, 2,  4,  8],   // row 1, axis 0
//!                [38, 9, 3,  0,  3],   // row 2, axis 0
//!                [ 4, 9, 0,  8, -1]]); // row 3, axis 0
//! //                \     \       \
//! //              column 0 \    column 4         axis 1
//! //                     column 2                axis 1
//!
//! // Subview into the last column.
//! let column = v.column(4);
//!
//! // Due to row-major memory layout, columns are non-contiguous
//! // and hence cannot be viewed as slices.
//! assert_eq!(column.as_slice(), None);
//!
//! // Instead, argsorting is specifically implemented for non-contiguous (sub)views.
//! let indexes = column.argsort();
//! assert_eq!(indexes, arr1(&[3, 0, 2, 1]));
//!
//! // Reorder all rows by the last column, `v` itself is untouched.
//! let rows = v.select(Axis(0), indexes.as_slice().unwrap());
//! assert!(rows == arr2(&[[ 4, 9, 0,  8, -1],
//!                        [-5, 4, 1, -3,  2],
//!                        [38, 9, 3,  0,  3],
//!                        [ 8, 3, 2,  4,  8]]));
//! ```
//!
//! # Current Implementation
//!
//! Complexities where *n* is the length of the (sub)view.
//!
//! | Resource | Complexity | Sequential (stable) | Parallel (unstable) | Parallel buffered (unstable) |
//! |----------|------------|---------------------|---------------------|------------------------------|
//! | Time     | Best       | *O*(*n*)            | *O*(*n*)            | *O*(*n*)                     |
//! | Time     | Worst      | *O*(*n* log *n*)    | *O*(*n* log *n*)    | *O*(*n* log *n*)             |
//! | Space    | Worst      | *O*(*n* + *n*/2)    | *O*(*n*)            | *O*(2*n*)                    |
//!
//! The space complexity includes the returned indices. Each execution strategy is a
//! [`SortStrategy`] and can be injected via [`argsort_with`].
//!
//! Parallel variants run on the current `rayon` thread pool, that is the global one (see
//! `RAYON_NUM_THREADS`) or the one entered via `rayon::ThreadPool::install`. They block until
//! done.
//!
//! [argsort]: https://numpy.org/doc/stable/reference/generated/numpy.argsort.html
//! [`argsort_with`]: Argsort1Ext::argsort_with
//!
//! # Features
//!
//!   * `alloc` for stable `argsort`/`argsort_by`/`argsort_by_key` and owned outputs. Enabled by
//!     `std`.
//!   * `std` enabled by `default` or `rayon`.
//!   * `rayon` for parallel `par_argsort*`.

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod sort_indexes;
pub mod strategy;

#[cfg(feature = "alloc")]
use crate::sort_indexes::{argsort_view_by, argsort_view_with};
#[cfg(feature = "rayon")]
use crate::strategy::{Parallel, ParallelBuffered};

pub use crate::strategy::SortStrategy;
use crate::strategy::argsort_view_into_with;
use core::cmp::Ordering;
use ndarray::{ArrayBase, Data, Ix1};
#[cfg(feature = "alloc")]
use ndarray::Array1;

pub use ndarray;

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array or (sub)view with
/// arbitrary memory layout (e.g., non-contiguous) providing methods computing the permutation of
/// indices that sorts it.
///
/// None of the methods mutate the array.
pub trait Argsort1Ext<A, S>
where
	S: Data<Elem = A>,
{
	/// Returns the indices that sort the array.
	///
	/// This sort is stable (i.e., the indices of equal elements keep their relative order) and
	/// *O*(*n* log *n*) worst-case.
	///
	/// # Current Implementation
	///
	/// The current algorithm is the adaptive, iterative merge sort of [`slice::sort_by`] applied
	/// to the identity permutation while comparing the indexed elements. It allocates temporary
	/// storage half the size of `self` on top of the returned indices.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_argsort::{ndarray::arr1, Argsort1Ext};
	///
	/// let v = arr1(&[5, 5, 1]);
	///
	/// assert_eq!(v.argsort(), arr1(&[2, 0, 1]));
	/// ```
	#[cfg(feature = "alloc")]
	fn argsort(&self) -> Array1<usize>
	where
		A: Ord;
	/// Returns the indices that sort the array with a comparator function.
	///
	/// This sort is stable (i.e., the indices of equal elements keep their relative order) and
	/// *O*(*n* log *n*) worst-case.
	///
	/// The comparator function must define a total ordering for the elements in the array. If
	/// the ordering is not total, the order of the indices is unspecified. An order is a
	/// total order if it is (for all `a`, `b` and `c`):
	///
	/// * total and antisymmetric: exactly one of `a < b`, `a == b` or `a > b` is true, and
	/// * transitive, `a < b` and `b < c` implies `a < c`. The same must hold for both `==` and `>`.
	///
	/// For example, while [`f64`] doesn't implement [`Ord`] because `NaN != NaN`, we can use
	/// `total_cmp` as our sort function.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_argsort::{ndarray::arr1, Argsort1Ext};
	///
	/// let floats = arr1(&[5f64, 4.0, 1.0, 3.0, 2.0]);
	/// assert_eq!(floats.argsort_by(f64::total_cmp), arr1(&[2, 4, 3, 1, 0]));
	///
	/// // reverse sorting
	/// assert_eq!(floats.argsort_by(|a, b| b.total_cmp(a)), arr1(&[0, 1, 3, 4, 2]));
	/// ```
	#[cfg(feature = "alloc")]
	fn argsort_by<F>(&self, compare: F) -> Array1<usize>
	where
		F: FnMut(&A, &A) -> Ordering;
	/// Returns the indices that sort the array with a key extraction function.
	///
	/// This sort is stable (i.e., the indices of equal elements keep their relative order) and
	/// *O*(*mn* log *n*) worst-case, where the key function is *O*(*m*).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_argsort::{ndarray::arr1, Argsort1Ext};
	///
	/// let v = arr1(&[-5i32, 4, 1, -3, 2]);
	///
	/// assert_eq!(v.argsort_by_key(|k| k.abs()), arr1(&[2, 4, 3, 1, 0]));
	/// ```
	#[cfg(feature = "alloc")]
	fn argsort_by_key<K, F>(&self, f: F) -> Array1<usize>
	where
		K: Ord,
		F: FnMut(&A) -> K;

	/// Returns the indices that sort the array in parallel.
	///
	/// This sort is unstable (i.e., the order of the indices of equal elements is unspecified and
	/// may differ between runs or thread pool sizes) and *O*(*n* log *n*) worst-case.
	///
	/// # Current Implementation
	///
	/// See [`Parallel`](strategy::Parallel).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_argsort::{ndarray::arr1, Argsort1Ext};
	///
	/// let v = arr1(&[-5, 4, 1, -3, 2]);
	///
	/// assert_eq!(v.par_argsort(), arr1(&[0, 3, 2, 4, 1]));
	/// ```
	#[cfg(feature = "rayon")]
	fn par_argsort(&self) -> Array1<usize>
	where
		A: Ord + Sync;
	/// Returns the indices that sort the array in parallel with a comparator function.
	///
	/// This sort is unstable (i.e., the order of the indices of equal elements is unspecified and
	/// may differ between runs or thread pool sizes) and *O*(*n* log *n*) worst-case.
	///
	/// The comparator function must define a total ordering for the elements in the array, see
	/// [`argsort_by`](Argsort1Ext::argsort_by).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_argsort::{ndarray::arr1, Argsort1Ext};
	///
	/// let v = arr1(&[5, 4, 1, 3, 2]);
	/// assert_eq!(v.par_argsort_by(|a, b| a.cmp(b)), arr1(&[2, 4, 3, 1, 0]));
	///
	/// // reverse sorting
	/// assert_eq!(v.par_argsort_by(|a, b| b.cmp(a)), arr1(&[0, 1, 3, 4, 2]));
	/// ```
	#[cfg(feature = "rayon")]
	fn par_argsort_by<F>(&self, compare: F) -> Array1<usize>
	where
		A: Sync,
		F: Fn(&A, &A) -> Ordering + Sync;
	/// Returns the indices that sort the array in parallel with a key extraction function.
	///
	/// This sort is unstable (i.e., the order of the indices of equal elements is unspecified and
	/// may differ between runs or thread pool sizes) and *O*(*mn* log *n*) worst-case, where the
	/// key function is *O*(*m*).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_argsort::{ndarray::arr1, Argsort1Ext};
	///
	/// let v = arr1(&[-5i32, 4, 1, -3, 2]);
	///
	/// assert_eq!(v.par_argsort_by_key(|k| k.abs()), arr1(&[2, 4, 3, 1, 0]));
	/// ```
	#[cfg(feature = "rayon")]
	fn par_argsort_by_key<K, F>(&self, f: F) -> Array1<usize>
	where
		A: Sync,
		K: Ord,
		F: Fn(&A) -> K + Sync;

	/// Returns the indices that sort the array in parallel using a temporary buffer.
	///
	/// This sort is unstable (i.e., the order of the indices of equal elements is unspecified) and
	/// *O*(*n* log *n*) worst-case. No further guarantee than for
	/// [`par_argsort`](Argsort1Ext::par_argsort) is given.
	///
	/// # Current Implementation
	///
	/// See [`ParallelBuffered`](strategy::ParallelBuffered).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_argsort::{ndarray::arr1, Argsort1Ext};
	///
	/// let v = arr1(&[-5, 4, 1, -3, 2]);
	///
	/// assert_eq!(v.par_argsort_buffered(), arr1(&[0, 3, 2, 4, 1]));
	/// ```
	#[cfg(feature = "rayon")]
	fn par_argsort_buffered(&self) -> Array1<usize>
	where
		A: Ord + Sync;
	/// Returns the indices that sort the array in parallel using a temporary buffer with a
	/// comparator function.
	///
	/// This sort is unstable (i.e., the order of the indices of equal elements is unspecified) and
	/// *O*(*n* log *n*) worst-case.
	#[cfg(feature = "rayon")]
	fn par_argsort_buffered_by<F>(&self, compare: F) -> Array1<usize>
	where
		A: Sync,
		F: Fn(&A, &A) -> Ordering + Sync;
	/// Returns the indices that sort the array in parallel using a temporary buffer with a key
	/// extraction function.
	///
	/// This sort is unstable (i.e., the order of the indices of equal elements is unspecified) and
	/// *O*(*mn* log *n*) worst-case, where the key function is *O*(*m*).
	#[cfg(feature = "rayon")]
	fn par_argsort_buffered_by_key<K, F>(&self, f: F) -> Array1<usize>
	where
		A: Sync,
		K: Ord,
		F: Fn(&A) -> K + Sync;

	/// Returns the indices that sort the array using `strategy` with a comparator function.
	///
	/// Whether the indices of equal elements keep their relative order is given by
	/// [`SortStrategy::STABLE`].
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_argsort::{ndarray::arr1, strategy::Stable, Argsort1Ext};
	///
	/// let v = arr1(&[3, 1, 2]);
	///
	/// assert_eq!(v.argsort_with(Stable, Ord::cmp), arr1(&[1, 2, 0]));
	/// ```
	#[cfg(feature = "alloc")]
	fn argsort_with<St, F>(&self, strategy: St, compare: F) -> Array1<usize>
	where
		A: Sync,
		St: SortStrategy,
		F: Fn(&A, &A) -> Ordering + Sync;
	/// Overwrites `indexes` with the indices that sort the array using `strategy` with a comparator
	/// function.
	///
	/// Previous content of `indexes` is ignored. Does not allocate unless `strategy` does, hence
	/// works with [`Unstable`](strategy::Unstable) in `no_std` environments without `alloc`.
	///
	/// # Panics
	///
	/// Panics when `indexes.len() != len()`.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_argsort::{ndarray::arr1, strategy::Unstable, Argsort1Ext};
	///
	/// let v = arr1(&[30, 10, 20]);
	/// let mut indexes = [0; 3];
	///
	/// v.argsort_into_with(Unstable, &mut indexes, Ord::cmp);
	/// assert_eq!(indexes, [1, 2, 0]);
	/// ```
	fn argsort_into_with<St, F>(&self, strategy: St, indexes: &mut [usize], compare: F)
	where
		A: Sync,
		St: SortStrategy,
		F: Fn(&A, &A) -> Ordering + Sync;

	/// Checks if `indexes` sort the array, i.e., whether all indices are in bounds and the indexed
	/// elements are in non-descending order.
	///
	/// Does not check whether `indexes` is a permutation, see
	#[cfg_attr(feature = "alloc", doc = "[`is_permutation`](sort_indexes::is_permutation).")]
	#[cfg_attr(not(feature = "alloc"), doc = "`is_permutation`.")]
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_argsort::{ndarray::arr1, Argsort1Ext};
	///
	/// let v = arr1(&[3, 1, 2]);
	///
	/// assert!(v.is_argsorted(&[1, 2, 0]));
	/// assert!(!v.is_argsorted(&[0, 1, 2]));
	/// assert!(!v.is_argsorted(&[1, 2, 3]));
	/// ```
	#[must_use]
	fn is_argsorted(&self, indexes: &[usize]) -> bool
	where
		A: PartialOrd;
	/// Checks if `indexes` sort the array using the given comparator function, i.e., whether all
	/// indices are in bounds and the indexed elements are in non-descending order.
	#[must_use]
	fn is_argsorted_by<F>(&self, indexes: &[usize], compare: F) -> bool
	where
		F: FnMut(&A, &A) -> Option<Ordering>;
}

impl<A, S> Argsort1Ext<A, S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = A>,
{
	#[cfg(feature = "alloc")]
	#[inline]
	fn argsort(&self) -> Array1<usize>
	where
		A: Ord,
	{
		Array1::from_vec(argsort_view_by(self.view(), A::cmp))
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn argsort_by<F>(&self, compare: F) -> Array1<usize>
	where
		F: FnMut(&A, &A) -> Ordering,
	{
		Array1::from_vec(argsort_view_by(self.view(), compare))
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn argsort_by_key<K, F>(&self, mut f: F) -> Array1<usize>
	where
		K: Ord,
		F: FnMut(&A) -> K,
	{
		Array1::from_vec(argsort_view_by(self.view(), |a: &A, b: &A| {
			f(a).cmp(&f(b))
		}))
	}

	#[cfg(feature = "rayon")]
	#[inline]
	fn par_argsort(&self) -> Array1<usize>
	where
		A: Ord + Sync,
	{
		self.argsort_with(Parallel, A::cmp)
	}
	#[cfg(feature = "rayon")]
	#[inline]
	fn par_argsort_by<F>(&self, compare: F) -> Array1<usize>
	where
		A: Sync,
		F: Fn(&A, &A) -> Ordering + Sync,
	{
		self.argsort_with(Parallel, compare)
	}
	#[cfg(feature = "rayon")]
	#[inline]
	fn par_argsort_by_key<K, F>(&self, f: F) -> Array1<usize>
	where
		A: Sync,
		K: Ord,
		F: Fn(&A) -> K + Sync,
	{
		self.argsort_with(Parallel, |a: &A, b: &A| f(a).cmp(&f(b)))
	}

	#[cfg(feature = "rayon")]
	#[inline]
	fn par_argsort_buffered(&self) -> Array1<usize>
	where
		A: Ord + Sync,
	{
		self.argsort_with(ParallelBuffered, A::cmp)
	}
	#[cfg(feature = "rayon")]
	#[inline]
	fn par_argsort_buffered_by<F>(&self, compare: F) -> Array1<usize>
	where
		A: Sync,
		F: Fn(&A, &A) -> Ordering + Sync,
	{
		self.argsort_with(ParallelBuffered, compare)
	}
	#[cfg(feature = "rayon")]
	#[inline]
	fn par_argsort_buffered_by_key<K, F>(&self, f: F) -> Array1<usize>
	where
		A: Sync,
		K: Ord,
		F: Fn(&A) -> K + Sync,
	{
		self.argsort_with(ParallelBuffered, |a: &A, b: &A| f(a).cmp(&f(b)))
	}

	#[cfg(feature = "alloc")]
	#[inline]
	fn argsort_with<St, F>(&self, strategy: St, compare: F) -> Array1<usize>
	where
		A: Sync,
		St: SortStrategy,
		F: Fn(&A, &A) -> Ordering + Sync,
	{
		Array1::from_vec(argsort_view_with(self.view(), strategy, compare))
	}
	#[inline]
	fn argsort_into_with<St, F>(&self, strategy: St, indexes: &mut [usize], compare: F)
	where
		A: Sync,
		St: SortStrategy,
		F: Fn(&A, &A) -> Ordering + Sync,
	{
		argsort_view_into_with(self.view(), strategy, indexes, compare);
	}

	#[inline]
	fn is_argsorted(&self, indexes: &[usize]) -> bool
	where
		A: PartialOrd,
	{
		self.is_argsorted_by(indexes, |a, b| a.partial_cmp(b))
	}
	fn is_argsorted_by<F>(&self, indexes: &[usize], mut compare: F) -> bool
	where
		F: FnMut(&A, &A) -> Option<Ordering>,
	{
		if indexes.iter().any(|&index| index >= self.len()) {
			return false;
		}
		indexes
			.windows(2)
			.all(|w| compare(&self[w[0]], &self[w[1]]).is_some_and(Ordering::is_le))
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{Argsort1Ext, strategy::Unstable};
	use core::cmp::Ordering;
	use ndarray::{Array1, Array2, Axis, arr1, s};
	use quickcheck_macros::quickcheck;

	#[derive(Debug, Clone, Copy)]
	struct Item {
		index: usize,
		value: u32,
	}

	impl Eq for Item {}

	impl PartialEq for Item {
		fn eq(&self, other: &Self) -> bool {
			self.value == other.value
		}
	}

	impl Ord for Item {
		fn cmp(&self, other: &Self) -> Ordering {
			self.value.cmp(&other.value)
		}
	}

	impl PartialOrd for Item {
		fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
			Some(self.cmp(other))
		}
	}

	impl From<(usize, u32)> for Item {
		fn from((index, value): (usize, u32)) -> Self {
			Self { index, value }
		}
	}

	#[quickcheck]
	fn stably_argsorted(xs: Vec<u32>) {
		let xs = xs
			.into_iter()
			.enumerate()
			.map(Item::from)
			.collect::<Vec<Item>>();
		let mut sorted = xs.clone();
		sorted.sort();
		let array = Array1::from_vec(xs);
		let indexes = array.argsort();
		assert!(array.is_argsorted(indexes.as_slice().unwrap()));
		for (&i, s) in indexes.iter().zip(&sorted) {
			assert_eq!(i, s.index);
			assert_eq!(array[i].value, s.value);
		}
	}

	#[quickcheck]
	fn argsorted_by_key(xs: Vec<i32>) {
		let array = Array1::from_vec(xs);
		let indexes = array.argsort_by_key(|x| x.unsigned_abs());
		let abs = array.mapv(i32::unsigned_abs);
		assert!(abs.is_argsorted(indexes.as_slice().unwrap()));
		assert_eq!(indexes, abs.argsort());
	}

	#[quickcheck]
	fn non_contiguous(xs: Vec<u8>) {
		let rows = xs.len() / 3;
		let matrix = Array2::from_shape_vec((rows, 3), xs[..rows * 3].to_vec()).unwrap();
		for column in matrix.columns() {
			let contiguous = column.to_owned();
			assert_eq!(column.argsort(), contiguous.argsort());
		}
		let strided = matrix.slice(s![..;-2, 1]);
		let indexes = strided.argsort();
		assert!(strided.is_argsorted(indexes.as_slice().unwrap()));
		let gathered = strided.select(Axis(0), indexes.as_slice().unwrap());
		assert!(gathered.iter().zip(gathered.iter().skip(1)).all(|(a, b)| a <= b));
	}

	#[test]
	fn argsort_leaves_input_untouched() {
		let v = arr1(&[4, 2, 9, 2]);
		let indexes = v.argsort();
		assert_eq!(v, arr1(&[4, 2, 9, 2]));
		assert_eq!(indexes, arr1(&[1, 3, 0, 2]));
	}

	#[test]
	fn all_equal_is_identity() {
		let v = Array1::from_elem(100, 'x');
		assert_eq!(v.argsort(), Array1::from_iter(0..100usize));
	}

	#[test]
	fn empty() {
		let v = Array1::<u64>::zeros(0);
		assert!(v.argsort().is_empty());
		let mut indexes: [usize; 0] = [];
		v.argsort_into_with(Unstable, &mut indexes, Ord::cmp);
		assert!(v.is_argsorted(&indexes));
	}

	#[test]
	fn into_ignores_previous_content() {
		let v = arr1(&[2, 0, 1]);
		let mut indexes = [7, 7, 7];
		v.argsort_into_with(Unstable, &mut indexes, Ord::cmp);
		assert_eq!(indexes, [1, 2, 0]);
	}

	#[test]
	#[should_panic(expected = "length of indexes must match length of array")]
	fn into_length_mismatch() {
		let v = arr1(&[2, 0, 1]);
		let mut indexes = [0; 2];
		v.argsort_into_with(Unstable, &mut indexes, Ord::cmp);
	}

	#[test]
	fn is_argsorted_partial() {
		let v = arr1(&[1.0, f64::NAN, 0.0]);
		assert!(!v.is_argsorted(&[2, 0, 1]));
		assert!(v.is_argsorted(&[2, 0]));
		assert!(v.is_argsorted(&[]));
		assert!(!v.is_argsorted(&[3]));
	}

	#[cfg(feature = "rayon")]
	mod par {
		use super::super::{
			Argsort1Ext,
			strategy::{Parallel, ParallelBuffered, SortStrategy, Stable, Unstable},
		};
		use crate::sort_indexes::is_permutation;
		use ndarray::{Array1, arr1};
		use quickcheck_macros::quickcheck;
		use rayon::ThreadPoolBuilder;

		#[test]
		fn examples() {
			let v = arr1(&[3, 1, 2]);
			assert_eq!(v.par_argsort(), arr1(&[1, 2, 0]));
			assert_eq!(v.par_argsort_buffered(), arr1(&[1, 2, 0]));
			let v = arr1(&[5, 5, 1]);
			for indexes in [v.par_argsort(), v.par_argsort_buffered()] {
				assert_eq!(indexes[0], 2);
				assert!(is_permutation(indexes.as_slice().unwrap()));
			}
		}

		#[cfg_attr(miri, ignore)]
		#[quickcheck]
		fn argsorted(xs: Vec<u16>) {
			let array = Array1::from_vec(xs);
			for indexes in [
				array.par_argsort(),
				array.par_argsort_by(|a, b| a.cmp(b)),
				array.par_argsort_by_key(|&x| x),
				array.par_argsort_buffered(),
				array.par_argsort_buffered_by(|a, b| a.cmp(b)),
				array.par_argsort_buffered_by_key(|&x| x),
			] {
				let indexes = indexes.as_slice().unwrap();
				assert!(is_permutation(indexes));
				assert!(array.is_argsorted(indexes));
			}
		}

		#[cfg_attr(miri, ignore)]
		#[quickcheck]
		fn strategies_agree_without_ties(xs: Vec<u32>) {
			let mut xs = xs;
			xs.sort_unstable();
			xs.dedup();
			xs.reverse();
			let array = Array1::from_vec(xs);
			let expected = array.argsort();
			fn check<St>(array: &Array1<u32>, strategy: St, expected: &Array1<usize>)
			where
				St: SortStrategy,
			{
				assert_eq!(&array.argsort_with(strategy, Ord::cmp), expected);
			}
			check(&array, Stable, &expected);
			check(&array, Unstable, &expected);
			check(&array, Parallel, &expected);
			check(&array, ParallelBuffered, &expected);
		}

		#[cfg_attr(miri, ignore)]
		#[test]
		fn thread_pool_sizes() {
			// Multiplying by an odd constant is a bijection, hence no ties.
			let v = (0..100_000u64)
				.map(|i| i.wrapping_mul(0x9e37_79b9_7f4a_7c15))
				.collect::<Array1<_>>();
			let expected = v.argsort();
			for num_threads in [1, 2, 4] {
				let pool = ThreadPoolBuilder::new()
					.num_threads(num_threads)
					.build()
					.unwrap();
				let (plain, buffered) =
					pool.install(|| (v.par_argsort(), v.par_argsort_buffered()));
				assert_eq!(plain, expected);
				assert_eq!(buffered, expected);
			}
		}
	}
}

/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use advanced_vector::Vector;
use pretty_assertions::assert_eq;

#[derive(proptest_derive::Arbitrary, Debug, Clone)]
#[cfg(not(miri))]
/// Operations that can be performed on a vector.
/// Positions are reduced modulo the current length before being applied.
enum VectorOperation {
    Push(i32),
    Pop,
    Insert(usize, i32),
    Erase(usize),
    Reserve(#[proptest(strategy = "0..64usize")] usize),
    Resize(#[proptest(strategy = "0..64usize")] usize),
    Truncate(#[proptest(strategy = "0..64usize")] usize),
    Clear,
    Assign(
        #[proptest(strategy = "proptest::collection::vec(proptest::prelude::any::<i32>(), 0..16)")]
        Vec<i32>,
    ),
}

#[cfg(not(miri))]
/// Applies `op` to both `vector` and `model`, checking the capacity policy along the way.
fn apply(vector: &mut Vector<i32>, model: &mut Vec<i32>, op: VectorOperation) {
    let old_capacity = vector.capacity();
    match op {
        VectorOperation::Push(value) => {
            let full = vector.len() == old_capacity;
            vector.push(value);
            model.push(value);
            let expected = match (full, old_capacity) {
                (false, cap) => cap,
                (true, 0) => 1,
                (true, cap) => cap * 2,
            };
            assert_eq!(vector.capacity(), expected, "push must double when full");
        }
        VectorOperation::Pop => {
            assert_eq!(vector.pop(), model.pop());
        }
        VectorOperation::Insert(index, value) => {
            let index = index % (model.len() + 1);
            assert_eq!(*vector.insert(index, value), value);
            model.insert(index, value);
        }
        VectorOperation::Erase(index) => {
            if model.is_empty() {
                assert_eq!(vector.erase(index), 0);
            } else {
                let index = index % model.len();
                assert_eq!(vector.erase(index), index);
                model.remove(index);
            }
        }
        VectorOperation::Reserve(capacity) => {
            vector.reserve(capacity);
            assert_eq!(vector.capacity(), old_capacity.max(capacity));
        }
        VectorOperation::Resize(len) => {
            vector.resize(len);
            model.resize(len, 0);
            assert_eq!(vector.capacity(), old_capacity.max(len));
        }
        VectorOperation::Truncate(len) => {
            vector.truncate(len);
            model.truncate(len);
            assert_eq!(vector.capacity(), old_capacity);
        }
        VectorOperation::Clear => {
            vector.clear();
            model.clear();
            assert_eq!(vector.capacity(), old_capacity);
        }
        VectorOperation::Assign(values) => {
            let source: Vector<i32> = values.iter().copied().collect();
            let source_capacity = source.capacity();
            let fits = values.len() <= old_capacity;
            vector.assign(source);
            *model = values;
            let expected = if fits { old_capacity } else { source_capacity };
            assert_eq!(vector.capacity(), expected);
        }
    }
}

// Disable the proptest when testing with Miri,
// as proptest accesses the file system, which is not supported Miri
#[cfg(not(miri))]
proptest::proptest! {
    #[test]
    /// Check whether the vector behaves like a [`std::vec::Vec`] under a random
    /// sequence of operations, and never reports fewer slots than live elements.
    fn sanity_check(ops: Vec<VectorOperation>) {
        let mut vector = Vector::new();
        let mut model = Vec::new();

        for op in ops {
            apply(&mut vector, &mut model, op);
            assert!(vector.capacity() >= vector.len());
            assert_eq!(vector.as_slice(), model.as_slice());
        }

        let cloned = vector.clone();
        assert_eq!(cloned, model);
        assert_eq!(cloned.capacity(), model.len());
        assert_eq!(vector.into_iter().collect::<Vec<_>>(), model);
    }
}

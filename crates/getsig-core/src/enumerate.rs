//! Lazy enumeration of the signature key space.
//!
//! Order: arity `0..=MAX_ARITY` outermost, then return tag in catalog order,
//! then the argument tuples in lexicographic catalog order with the last
//! position varying fastest. Both generators walk buckets in this order.

use getsig_contracts::MAX_ARITY;
use itertools::{Either, Itertools};
use serde::Serialize;

use crate::catalog::{TypeCatalog, TypeTag};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SignatureKey {
    pub args: Vec<TypeTag>,
    pub ret: TypeTag,
}

impl SignatureKey {
    pub fn new(args: Vec<TypeTag>, ret: TypeTag) -> Self {
        SignatureKey { args, ret }
    }

    pub fn arity(&self) -> usize {
        self.args.len()
    }
}

/// All keys sharing one arity and return tag. Each bucket becomes one test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Bucket {
    pub arity: usize,
    pub ret: TypeTag,
}

impl Bucket {
    pub fn keys(self, catalog: &TypeCatalog) -> impl Iterator<Item = SignatureKey> + '_ {
        argument_signatures(catalog, self.arity).map(move |args| SignatureKey {
            args,
            ret: self.ret,
        })
    }

    pub fn len(self, catalog: &TypeCatalog) -> usize {
        catalog.len().pow(self.arity as u32)
    }
}

/// Every argument tuple of the given arity; a single empty tuple for arity 0.
pub fn argument_signatures(
    catalog: &TypeCatalog,
    arity: usize,
) -> impl Iterator<Item = Vec<TypeTag>> + '_ {
    if arity == 0 {
        Either::Left(std::iter::once(Vec::new()))
    } else {
        Either::Right(
            (0..arity)
                .map(move |_| catalog.tags())
                .multi_cartesian_product(),
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Enumeration<'a> {
    catalog: &'a TypeCatalog,
}

impl<'a> Enumeration<'a> {
    pub fn new(catalog: &'a TypeCatalog) -> Self {
        Enumeration { catalog }
    }

    pub fn buckets(&self) -> impl Iterator<Item = Bucket> + 'a {
        let catalog = self.catalog;
        (0..=MAX_ARITY)
            .flat_map(move |arity| catalog.tags().map(move |ret| Bucket { arity, ret }))
    }

    pub fn keys(&self) -> impl Iterator<Item = SignatureKey> + 'a {
        let catalog = self.catalog;
        self.buckets().flat_map(move |b| b.keys(catalog))
    }

    pub fn total_keys(&self) -> usize {
        self.buckets().map(|b| b.len(self.catalog)).sum()
    }
}

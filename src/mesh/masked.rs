// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use crate::error::{TriError, TriResult};

/// Values paired with an optional per-slot validity mask.
///
/// A `true` mask entry marks the slot as invalid; its value is kept in
/// `data` but carries no meaning. A missing mask means every slot is valid.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedArray<T> {
    data: Vec<T>,
    mask: Option<Vec<bool>>,
}

impl<T> MaskedArray<T> {
    /// Fails with [`TriError::MaskLengthMismatch`] if `mask` and `data`
    /// lengths differ.
    pub fn new(data: Vec<T>, mask: Option<Vec<bool>>) -> TriResult<Self> {
        if let Some(m) = &mask {
            if m.len() != data.len() {
                return Err(TriError::MaskLengthMismatch {
                    expected: data.len(),
                    actual: m.len(),
                });
            }
        }
        Ok(Self { data, mask })
    }

    pub fn unmasked(data: Vec<T>) -> Self {
        Self { data, mask: None }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn mask(&self) -> Option<&[bool]> {
        self.mask.as_deref()
    }

    #[inline]
    pub fn is_masked(&self, i: usize) -> bool {
        self.mask.as_ref().is_some_and(|m| m.get(i).copied().unwrap_or(false))
    }

    /// `None` when the slot is masked.
    pub fn get(&self, i: usize) -> Option<&T> {
        if self.is_masked(i) {
            None
        } else {
            self.data.get(i)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&T>> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| if self.is_masked(i) { None } else { Some(v) })
    }

    /// Unmasked values only, in order.
    pub fn compressed(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().flatten().cloned().collect()
    }

    /// Every slot resolved, masked ones replaced by `fill`.
    pub fn filled(&self, fill: T) -> Vec<T>
    where
        T: Clone,
    {
        self.iter()
            .map(|v| v.cloned().unwrap_or_else(|| fill.clone()))
            .collect()
    }

    /// Apply `f` to unmasked slots; masked slots keep their mask and get `fill`.
    pub fn map_unmasked<U, F>(&self, fill: U, mut f: F) -> MaskedArray<U>
    where
        U: Clone,
        F: FnMut(&T) -> U,
    {
        let data = self
            .iter()
            .map(|v| v.map_or_else(|| fill.clone(), &mut f))
            .collect();
        MaskedArray {
            data,
            mask: self.mask.clone(),
        }
    }

    pub fn into_parts(self) -> (Vec<T>, Option<Vec<bool>>) {
        (self.data, self.mask)
    }
}

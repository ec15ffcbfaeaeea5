use core::cmp;
use core::mem::MaybeUninit;
use core::ptr;

use crate::leonardo::{LeonardoTable, PositionCounter};

// Elements are moved through a stack buffer of this size, wider elements are moved in
// several chunks.
const CYCLE_CHUNK: usize = 256;

// Every trinkle step consumes at least one bit of the position counter, and every sift
// step lowers the tree order by at least one, which is always less than the counter width.
const MAX_PATH: usize = PositionCounter::BITS as usize + 1;

/// The nodes visited by a single sift or trinkle, root first.
struct Path {
    nodes: [MaybeUninit<*mut u8>; MAX_PATH],
    len: usize,
}

impl Path {
    #[inline(always)]
    fn new(root: *mut u8) -> Self {
        unsafe {
            // SAFETY: an array of MaybeUninit's is trivially init.
            let mut path = Self {
                nodes: MaybeUninit::uninit().assume_init(),
                len: 0,
            };
            path.push_unchecked(root);
            path
        }
    }

    /// SAFETY: the path may not be full.
    #[inline(always)]
    unsafe fn push_unchecked(&mut self, node: *mut u8) {
        debug_assert!(self.len < MAX_PATH);
        unsafe {
            *self.nodes.get_unchecked_mut(self.len) = MaybeUninit::new(node);
        }
        self.len += 1;
    }

    #[inline(always)]
    fn root(&self) -> *mut u8 {
        // SAFETY: the root is pushed on construction.
        unsafe { self.nodes.get_unchecked(0).assume_init() }
    }
}

/// Rotates the elements on `path` by one position towards the root: the element at
/// `path[i + 1]` moves to `path[i]` and the element at the root moves to the last node.
///
/// SAFETY: every node must point to `width` readable and writable bytes, and no two nodes
/// may overlap.
unsafe fn cycle(width: usize, path: &Path) {
    let n = path.len;
    if n < 2 {
        return;
    }

    let mut tmp = MaybeUninit::<[u8; CYCLE_CHUNK]>::uninit();
    let tmp = tmp.as_mut_ptr().cast::<u8>();
    let nodes = path.nodes.as_ptr().cast::<*mut u8>();

    let mut offset = 0;
    while offset < width {
        let chunk = cmp::min(CYCLE_CHUNK, width - offset);

        // SAFETY: the first `n` nodes are initialized, see Path. Each chunk stays inside
        // its element as `offset + chunk <= width`.
        unsafe {
            ptr::copy_nonoverlapping((*nodes).add(offset), tmp, chunk);
            for i in 0..n - 1 {
                let dst = (*nodes.add(i)).add(offset);
                let src = (*nodes.add(i + 1)).add(offset);
                ptr::copy_nonoverlapping(src, dst, chunk);
            }
            ptr::copy_nonoverlapping(tmp, (*nodes.add(n - 1)).add(offset), chunk);
        }

        offset += chunk;
    }
}

/// Restores the heap property of the Leonardo tree of order `pshift` rooted at `head`,
/// assuming both of its subtrees are already heaps.
///
/// SAFETY: `head` must be the root of a complete tree of that order inside the buffer
/// described by `lp`.
unsafe fn sift<F>(
    mut head: *mut u8,
    width: usize,
    is_less: &mut F,
    mut pshift: u32,
    lp: &LeonardoTable,
) where
    F: FnMut(*const u8, *const u8) -> bool,
{
    let mut path = Path::new(head);

    // SAFETY: a tree of order > 1 has its right child directly below the root and its left
    // child another L(pshift - 2) elements below that, both still inside the tree.
    unsafe {
        while pshift > 1 {
            let rt = head.sub(width);
            let lf = rt.sub(lp.get_unchecked(pshift - 2));

            let root = path.root();
            if !is_less(root, lf) && !is_less(root, rt) {
                break;
            }

            // Descend into the larger child, the left one on ties.
            if !is_less(lf, rt) {
                path.push_unchecked(lf);
                head = lf;
                pshift -= 1;
            } else {
                path.push_unchecked(rt);
                head = rt;
                pshift -= 2;
            }
        }

        cycle(width, &path);
    }
}

/// Moves the root at `head` leftwards along the roots of the forest described by `p`
/// until the roots are in ascending order, then sifts it into the tree it ends up in.
///
/// If `trusty` is set the caller vouches that the tree rooted at `head` is already a heap,
/// which saves comparing the stepson against its children.
///
/// SAFETY: `p` and `pshift` must describe the forest that ends at `head`.
unsafe fn trinkle<F>(
    mut head: *mut u8,
    width: usize,
    is_less: &mut F,
    mut p: PositionCounter,
    mut pshift: u32,
    mut trusty: bool,
    lp: &LeonardoTable,
) where
    F: FnMut(*const u8, *const u8) -> bool,
{
    let mut path = Path::new(head);

    // SAFETY: while p is not one there is another tree left of the current one, and its
    // root (the stepson) sits exactly L(pshift) elements below `head`.
    unsafe {
        while !p.is_one() {
            let stepson = head.sub(lp.get_unchecked(pshift));
            if !is_less(path.root(), stepson) {
                break;
            }

            if !trusty && pshift > 1 {
                let rt = head.sub(width);
                let lf = rt.sub(lp.get_unchecked(pshift - 2));
                if !is_less(rt, stepson) || !is_less(lf, stepson) {
                    break;
                }
            }

            path.push_unchecked(stepson);
            head = stepson;
            let trail = p.trailing_zeros();
            p.shift_right(trail);
            pshift += trail;
            trusty = false;
        }

        if !trusty {
            cycle(width, &path);
            sift(head, width, is_less, pshift, lp);
        }
    }
}

/// Sorts `nel` elements of `width` bytes starting at `base` in ascending order of
/// `is_less`.
///
/// The comparator only ever sees whole elements: every sift and trinkle finishes all of
/// its comparisons before it moves anything, so if `is_less` panics the buffer still holds
/// each original element exactly once.
///
/// SAFETY: `base` must be valid for reads and writes of `nel * width` bytes, and that
/// product must not overflow.
pub unsafe fn sort<F>(base: *mut u8, nel: usize, width: usize, is_less: &mut F)
where
    F: FnMut(*const u8, *const u8) -> bool,
{
    if nel < 2 || width == 0 {
        return;
    }

    let size = nel * width;
    let lp = LeonardoTable::new(width, size);

    let mut p = PositionCounter::ONE;
    let mut pshift: u32 = 1;

    // SAFETY: `head` only moves between `base` and `high`, one element at a time, and the
    // forest invariant keeps every tree that sift and trinkle touch inside the buffer.
    unsafe {
        let mut head = base;
        let high = base.add(size - width);

        // Build the forest, growing it by one element per iteration.
        while head < high {
            if p.low_pair_set() {
                sift(head, width, is_less, pshift, &lp);
                p.shift_right(2);
                pshift += 2;
            } else {
                // Only a tree that will never be merged into a larger one needs its root
                // in order with the other roots right away.
                let remaining = high.offset_from(head) as usize;
                if lp.get_unchecked(pshift - 1) >= remaining {
                    trinkle(head, width, is_less, p, pshift, false, &lp);
                } else {
                    sift(head, width, is_less, pshift, &lp);
                }

                if pshift == 1 {
                    p.shift_left(1);
                    pshift = 0;
                } else {
                    p.shift_left(pshift - 1);
                    pshift = 1;
                }
            }

            p.set_low_bit();
            head = head.add(width);
        }

        trinkle(head, width, is_less, p, pshift, false, &lp);

        // Tear the forest down, the largest remaining root is always at `head`.
        while pshift != 1 || !p.is_one() {
            if pshift <= 1 {
                let trail = p.trailing_zeros();
                p.shift_right(trail);
                pshift += trail;
            } else {
                // Expose the two children of the tree at `head` as roots of their own.
                p.shift_left(2);
                pshift -= 2;
                p.flip_low3();
                p.shift_right(1);
                trinkle(
                    head.sub(lp.get_unchecked(pshift) + width),
                    width,
                    is_less,
                    p,
                    pshift + 1,
                    true,
                    &lp,
                );
                p.shift_left(1);
                p.set_low_bit();
                trinkle(head.sub(width), width, is_less, p, pshift, true, &lp);
            }
            head = head.sub(width);
        }
    }
}

//! Launch-level integration tests: whole kernels written against the
//! prelude, executed over the parallel driver, checked against a
//! sequential rendition of the same computation.

use std::sync::atomic::Ordering;

use riptide::buffer::HostBuffer;
use riptide::kernel::*;
use riptide::{launch, DispatchContext, GridDim};

/// A 2-d stencil-free kernel: per-item vector math through global
/// memory, plus an atomic tally of lanes that crossed a threshold.
fn saxpy_norm_kernel(
    ctx: &DispatchContext,
    x: ConstantPtr<float4>,
    y: GlobalPtr<float4>,
    over_threshold: GlobalPtr<u32>,
) {
    let i = get_global_linear_id(ctx);
    unsafe {
        let a = x.add(i).read();
        let b = y.add(i).read();
        let r = fma(a, float4::splat(2.0), b);
        y.add(i).write(r);

        let hot = isgreater(r, float4::splat(10.0));
        if any(hot) {
            atomic_fetch_add(over_threshold, 1);
        }
    }
}

#[test]
fn parallel_launch_matches_sequential_execution() {
    let n = 1024;
    let xs: Vec<float4> = (0..n)
        .map(|i| float4::new(i as f32, 0.5 * i as f32, -(i as f32), 0.25))
        .collect();
    let ys: Vec<float4> = (0..n).map(|i| float4::splat(i as f32 * 0.125)).collect();

    // Sequential reference.
    let mut expected = ys.clone();
    let mut expected_count = 0u32;
    for i in 0..n {
        let r = fma(xs[i], float4::splat(2.0), expected[i]);
        expected[i] = r;
        if any(isgreater(r, float4::splat(10.0))) {
            expected_count += 1;
        }
    }

    // Parallel run over the driver.
    let mut x_buf = HostBuffer::from_vec(xs);
    let mut y_buf = HostBuffer::from_vec(ys);
    let mut count_buf = HostBuffer::<u32>::new(1);
    {
        let xm = x_buf.map();
        let ym = y_buf.map();
        let cm = count_buf.map();
        let (xp, yp, cp) = (xm.constant_ptr(), ym.global_ptr(), cm.global_ptr());
        launch(GridDim::d2(32, 32), move |ctx| {
            saxpy_norm_kernel(ctx, xp, yp, cp);
        });
    }

    assert_eq!(y_buf.as_slice(), expected.as_slice());
    assert_eq!(count_buf.as_slice()[0], expected_count);
}

#[test]
fn histogram_via_atomics() {
    let n = 4096;
    let data: Vec<u32> = (0..n as u32).map(|i| i.wrapping_mul(2654435761) % 16).collect();

    let mut expected = [0u32; 16];
    for &v in &data {
        expected[v as usize] += 1;
    }

    let mut src = HostBuffer::from_vec(data);
    let mut hist = HostBuffer::<u32>::new(16);
    {
        let sm = src.map();
        let hm = hist.map();
        let (sp, hp) = (sm.constant_ptr(), hm.global_ptr());
        launch(GridDim::d1(n), move |ctx| {
            let i = get_global_id(ctx, 0);
            unsafe {
                let bucket = sp.add(i).read() as usize;
                atomic_fetch_add_explicit(hp.add(bucket), 1, Ordering::Relaxed);
            }
        });
    }

    assert_eq!(hist.as_slice(), &expected);
}

#[test]
fn geometric_pipeline_over_packed_buffers() {
    // Normals for a grid of positions, stored packed (3 floats per
    // item, no padding), read and written through vload/vstore.
    let n = 256;
    let mut packed = vec![0.0f32; 3 * n];
    for i in 0..n {
        packed[3 * i] = 1.0 + i as f32;
        packed[3 * i + 1] = -(i as f32);
        packed[3 * i + 2] = 0.5;
    }

    let mut expected = vec![0.0f32; 3 * n];
    for i in 0..n {
        let v = float3::new(packed[3 * i], packed[3 * i + 1], packed[3 * i + 2]);
        let u = normalize(v);
        expected[3 * i] = u.x();
        expected[3 * i + 1] = u.y();
        expected[3 * i + 2] = u.z();
    }

    let mut buf = HostBuffer::from_vec(packed);
    {
        let m = buf.map();
        let p = m.global_ptr();
        launch(GridDim::d1(n), move |ctx| {
            let i = get_global_id(ctx, 0);
            unsafe {
                let v: float3 = vload_ptr(p.as_raw() as *const f32, i);
                let u = normalize(v);
                vstore_ptr(u, p.as_raw(), i);
            }
        });
    }

    assert_eq!(buf.as_slice(), expected.as_slice());
}

#[test]
fn reduction_with_compare_exchange() {
    // Max-reduce via a cmpxchg loop, the canonical pattern for an
    // operation the atomic library lacks a fetch form of (f32 max
    // through its ordered bit pattern is not provided; use i32 here).
    let n = 2048;
    let data: Vec<i32> = (0..n as i32).map(|i| (i * 37) % 1999 - 500).collect();
    let expected = *data.iter().max().unwrap();

    let mut src = HostBuffer::from_vec(data);
    let mut max = HostBuffer::from_vec(vec![i32::MIN]);
    {
        let sm = src.map();
        let mm = max.map();
        let (sp, mp) = (sm.constant_ptr(), mm.global_ptr());
        launch(GridDim::d1(n), move |ctx| {
            let i = get_global_id(ctx, 0);
            unsafe {
                let v = sp.add(i).read();
                let mut seen = atomic_load(mp);
                while v > seen {
                    if atomic_compare_exchange_strong(mp, &mut seen, v) {
                        break;
                    }
                }
            }
        });
    }

    assert_eq!(max.as_slice()[0], expected);
}

/// Fixed small-window kernels used when sigma is derived from the size,
/// matching OpenCV's `getGaussianKernel` table for sizes 1, 3, 5 and 7.
const SMALL_KERNELS: [&[f32]; 4] = [
    &[1.0],
    &[0.25, 0.5, 0.25],
    &[0.0625, 0.25, 0.375, 0.25, 0.0625],
    &[
        0.03125, 0.109375, 0.21875, 0.28125, 0.21875, 0.109375, 0.03125,
    ],
];

/// Sigma implied by a kernel size when none is given (OpenCV's sigma=0 rule).
pub fn sigma_for_kernel_size(kernel_size: usize) -> f64 {
    0.3 * ((kernel_size as f64 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Precompute a normalised 1D Gaussian kernel of the given size.
///
/// `kernel_size` must be odd and >= 1.
pub fn gaussian_kernel_1d(kernel_size: usize) -> Vec<f32> {
    debug_assert!(kernel_size >= 1 && kernel_size % 2 == 1);
    if kernel_size <= 7 {
        return SMALL_KERNELS[kernel_size / 2].to_vec();
    }
    let sigma = sigma_for_kernel_size(kernel_size);
    let half = (kernel_size / 2) as f64;
    let mut kernel_f64: Vec<f64> = (0..kernel_size)
        .map(|i| {
            let x = i as f64 - half;
            (-x * x / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let sum: f64 = kernel_f64.iter().sum();
    for v in &mut kernel_f64 {
        *v /= sum;
    }
    kernel_f64.iter().map(|&v| v as f32).collect()
}

/// Mirror an out-of-range index back into `0..len` without repeating the edge
/// sample (`dcb|abcd|cba`).
fn reflect_101(i: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let last = len as isize - 1;
    let period = 2 * last;
    let mut j = i.rem_euclid(period);
    if j > last {
        j = period - j;
    }
    j as usize
}

/// Blur interleaved `u8` pixel data into a new buffer.
///
/// Kernel size 1 (or an empty image) returns an unchanged copy.
pub fn gaussian_blur(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    kernel_size: usize,
) -> Vec<u8> {
    let mut out = data.to_vec();
    if kernel_size <= 1 || width == 0 || height == 0 {
        return out;
    }
    let kernel = gaussian_kernel_1d(kernel_size);
    let mut temp = Vec::new();
    separable_gaussian_blur_with_kernel(&mut out, width, height, channels, &kernel, &mut temp);
    out
}

/// Apply a separable Gaussian blur in place using a pre-computed kernel, reusing `temp`.
pub fn separable_gaussian_blur_with_kernel(
    data: &mut [u8],
    width: usize,
    height: usize,
    channels: usize,
    kernel: &[f32],
    temp: &mut Vec<f32>,
) {
    let kernel_size = kernel.len();
    if kernel_size <= 1 || width == 0 || height == 0 {
        return;
    }
    let half = (kernel_size / 2) as isize;

    temp.clear();
    temp.resize(width * height * channels, 0.0);

    // Horizontal pass: data → temp
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let mut sum = 0.0f32;
                for (k, &w) in kernel.iter().enumerate() {
                    let sx = reflect_101(x as isize + k as isize - half, width);
                    sum += data[(y * width + sx) * channels + c] as f32 * w;
                }
                temp[(y * width + x) * channels + c] = sum;
            }
        }
    }

    // Vertical pass: temp → data
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let mut sum = 0.0f32;
                for (k, &w) in kernel.iter().enumerate() {
                    let sy = reflect_101(y as isize + k as isize - half, height);
                    sum += temp[(sy * width + x) * channels + c] * w;
                }
                data[(y * width + x) * channels + c] = sum.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
}

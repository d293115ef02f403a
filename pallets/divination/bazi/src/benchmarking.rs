//! # Bazi Engine Pallet Benchmarking
//!
//! 八字推演引擎基准测试

#![cfg(feature = "runtime-benchmarks")]

use super::*;
use crate::types::ChartInput;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;
use pallet::*;

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn create_chart() {
        let caller: T::AccountId = whitelisted_caller();
        let input = ChartInput::Solar {
            year: 1990,
            month: 6,
            day: 15,
            hour: 12,
            minute: 0,
            longitude: Some(1_164_000),
        };

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), input);
    }

    #[benchmark]
    fn delete_chart() {
        let caller: T::AccountId = whitelisted_caller();
        let input = ChartInput::Solar {
            year: 1990,
            month: 6,
            day: 15,
            hour: 12,
            minute: 0,
            longitude: None,
        };
        assert!(Pallet::<T>::create_chart(RawOrigin::Signed(caller.clone()).into(), input).is_ok());
        let chart_id: u64 = 0;

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), chart_id);
    }

    impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}

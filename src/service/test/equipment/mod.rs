use crate::{
    cache::{Cache, CacheFamily, MemoryCache, NoopCache, LIST_TTL},
    error::AppError,
    model::equipment::{
        CreateEquipmentParams, EquipmentCategory, EquipmentFilter, EquipmentStatus,
        UpdateEquipmentParams,
    },
    service::equipment::EquipmentService,
};
use test_utils::{builder::TestBuilder, factory};

mod get;
mod list;
mod update;

//! Fields resolved by downcasting the parent value and reading from it.

use super::self_prelude::*;
use async_graphql::Value;
use std::any::Any;

#[extension_trait]
pub impl ParentField for Field {
    fn parent_scalar<T, V, F>(name: impl Into<String>, ty: impl Into<TypeRef>, get: F) -> Self
    where
        T: Any + Send + Sync,
        V: Into<Value> + Send,
        F: Fn(&T) -> V + Copy + Send + Sync + 'static,
    {
        Field::new(name, ty, move |ctx| {
            FieldFuture::new(async move {
                let parent = ctx.parent_value.try_downcast_ref::<T>()?;
                Ok(Some(FieldValue::value(get(parent))))
            })
        })
    }

    /// Like `parent_scalar`, resolving to `null` on `None`.
    fn parent_optional_scalar<T, V, F>(
        name: impl Into<String>,
        ty: impl Into<TypeRef>,
        get: F,
    ) -> Self
    where
        T: Any + Send + Sync,
        V: Into<Value> + Send,
        F: Fn(&T) -> Option<V> + Copy + Send + Sync + 'static,
    {
        Field::new(name, ty, move |ctx| {
            FieldFuture::new(async move {
                let parent = ctx.parent_value.try_downcast_ref::<T>()?;
                Ok(get(parent).map(FieldValue::value))
            })
        })
    }

    /// A field whose value is an object borrowed from the parent.
    fn parent_object<T, U, F>(name: impl Into<String>, ty: impl Into<TypeRef>, get: F) -> Self
    where
        T: Any + Send + Sync,
        U: Any + Send + Sync,
        F: for<'x> Fn(&'x T) -> &'x U + Copy + Send + Sync + 'static,
    {
        Field::new(name, ty, move |ctx| {
            FieldFuture::new(async move {
                let parent = ctx.parent_value.try_downcast_ref::<T>()?;
                Ok(Some(FieldValue::borrowed_any(get(parent))))
            })
        })
    }

    fn parent_optional_object<T, U, F>(
        name: impl Into<String>,
        ty: impl Into<TypeRef>,
        get: F,
    ) -> Self
    where
        T: Any + Send + Sync,
        U: Any + Send + Sync,
        F: for<'x> Fn(&'x T) -> Option<&'x U> + Copy + Send + Sync + 'static,
    {
        Field::new(name, ty, move |ctx| {
            FieldFuture::new(async move {
                let parent = ctx.parent_value.try_downcast_ref::<T>()?;
                Ok(get(parent).map(|object| FieldValue::borrowed_any(object)))
            })
        })
    }

    fn parent_list<T, U, F>(name: impl Into<String>, ty: impl Into<TypeRef>, get: F) -> Self
    where
        T: Any + Send + Sync,
        U: Any + Send + Sync,
        F: for<'x> Fn(&'x T) -> Vec<&'x U> + Copy + Send + Sync + 'static,
    {
        Field::new(name, ty, move |ctx| {
            FieldFuture::new(async move {
                let parent = ctx.parent_value.try_downcast_ref::<T>()?;
                let items = get(parent)
                    .into_iter()
                    .map(|object| FieldValue::borrowed_any(object));
                Ok(Some(FieldValue::list(items)))
            })
        })
    }
}

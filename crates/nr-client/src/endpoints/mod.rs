/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Endpoint table and resource namespaces.
//!
//! Each module lists its operations once: a request builder turning named
//! parameters into an [`ApiRequest`](crate::request::ApiRequest), and a
//! [`namespace!`] entry binding that builder to a method name and response
//! type. The macro emits the async methods on `Namespace<Transport>` and the
//! blocking methods on `Namespace<BlockingTransport>`, so the two client
//! flavours cannot drift apart.

pub mod articles;
pub mod entities;
pub mod graph;
pub mod meta;
pub mod search;
pub mod sources;
pub mod stories;

pub use articles::{ArticleListQuery, ArticlesEndpoints};
pub use entities::{EntitiesEndpoints, EntityListQuery};
pub use graph::GraphEndpoints;
pub use meta::MetaEndpoints;
pub use search::SearchEndpoints;
pub use sources::SourcesEndpoints;
pub use stories::{StoriesEndpoints, StoryListQuery};

/// Declare a namespace struct and generate its async and blocking methods
/// from one list of `fn name(args) -> Response => request_builder;` entries.
macro_rules! namespace {
  (
    $(#[$struct_doc:meta])*
    $name:ident {
      $(
        $(#[$doc:meta])*
        fn $method:ident ( $($arg:ident : $ty:ty),* $(,)? ) -> $out:ty => $build:expr ;
      )*
    }
  ) => {
    $(#[$struct_doc])*
    pub struct $name<T = $crate::transport::Transport> {
      transport: ::std::sync::Arc<T>,
    }

    impl<T> $name<T> {
      /// Bind the namespace to a transport
      pub fn new(transport: ::std::sync::Arc<T>) -> Self {
        Self { transport }
      }
    }

    impl<T> Clone for $name<T> {
      fn clone(&self) -> Self {
        Self { transport: self.transport.clone() }
      }
    }

    impl<T: ::std::fmt::Debug> ::std::fmt::Debug for $name<T> {
      fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.debug_struct(stringify!($name)).field("transport", &self.transport).finish()
      }
    }

    impl $name<$crate::transport::Transport> {
      $(
        $(#[$doc])*
        pub async fn $method(&self, $($arg: $ty),*) -> ::nr_core::Result<$out> {
          self.transport.execute($build).await
        }
      )*
    }

    impl $name<$crate::transport::BlockingTransport> {
      $(
        $(#[$doc])*
        pub fn $method(&self, $($arg: $ty),*) -> ::nr_core::Result<$out> {
          self.transport.execute($build)
        }
      )*
    }
  };
}

pub(crate) use namespace;
